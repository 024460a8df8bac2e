// Discord layer - serenity adapters and helpers built on top of the core.

#[path = "adapters/bot_message.rs"]
pub mod adapters;

#[path = "commands/command_hooks.rs"]
pub mod commands;

#[path = "embeds/embed_builder_local.rs"]
pub mod embeds;

#[path = "events/listener_table.rs"]
pub mod events;

#[path = "logging/channel_logger.rs"]
pub mod logging;

#[path = "reactions/reaction_utils.rs"]
pub mod reactions;

pub use adapters::{BotCommand, BotCommandRegistry, BotEvent, BotMessage, ChannelAnnouncer};
pub use commands::DiscordCommandHooks;
pub use embeds::{EmbedBuilderLocal, EmbedFieldLocal};
pub use events::{BotEventListener, GatewayEvent, ListenerTable};
pub use logging::{BotLogger, ChannelLogger};
pub use reactions::{ReactionOptions, ReactionUtils};
