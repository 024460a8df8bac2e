pub mod command_models;
pub mod command_parser;
pub mod command_registry;

pub use command_models::{
    AnnouncementChannel, CommandCategory, CommandHandler, CommandHooks, CommandMessage,
    CommandResponse, Error, LoadSummary, LoadWarning, MessageEventCore, NoopHooks,
    SCHEDULED_ANNOUNCEMENT, SCHEDULED_STATEMENT,
};
pub use command_parser::{parse_command, ParsedCommand};
pub use command_registry::{CommandRegistry, CommandTable};
