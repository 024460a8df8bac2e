// Entry point of the bot.
//
// This file's job is to:
// 1. Load configuration
// 2. Load commands and event listeners from their directories
// 3. Set up the Discord framework and the scheduled runner

mod handlers;

use anyhow::Context as _;
use discord_commons::core::commands::{parse_command, Error};
use discord_commons::core::events::EventRegistry;
use discord_commons::discord::{
    BotCommandRegistry, BotEventListener, BotLogger, BotMessage, ChannelAnnouncer, ChannelLogger,
    DiscordCommandHooks, ListenerTable,
};
use discord_commons::infra::{BotConfig, OsFileSystem};
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Shared state handed to every poise callback.
struct Data {
    registry: Arc<BotCommandRegistry>,
    listeners: Arc<ListenerTable>,
    logger: Arc<ChannelLogger>,
    config: Arc<BotConfig>,
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        if !new_message.author.bot {
            handle_message(ctx, new_message, data).await;
        }
    }

    data.listeners.dispatch(ctx, event).await;
    Ok(())
}

async fn handle_message(ctx: &serenity::Context, message: &serenity::Message, data: &Data) {
    let Some(parsed) = parse_command(&message.content, &data.config.prefix) else {
        return;
    };

    let statement = parsed.statement.clone();
    let mut event = parsed.into_event(BotMessage::new(ctx.clone(), message.clone()));
    if let Err(e) = data.registry.execute(&mut event).await {
        data.logger
            .error_log(&e, &format!("While running `{}{}`", data.config.prefix, statement))
            .await;
        if let Err(e) = message
            .reply(&ctx.http, "Something went wrong running that command.")
            .await
        {
            tracing::warn!("Failed to report command error: {}", e);
        }
    }
}

/// Runs the scheduled commands every `schedule_interval`, starting one
/// interval after startup.
fn spawn_scheduled_runner(
    ctx: serenity::Context,
    channel_id: serenity::ChannelId,
    data: &Data,
) {
    let registry = Arc::clone(&data.registry);
    let logger = Arc::clone(&data.logger);
    let period = data.config.schedule_interval;

    tokio::spawn(async move {
        let announcer = ChannelAnnouncer::new(ctx, channel_id);
        let mut interval = tokio::time::interval(period);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            tracing::debug!("Scheduled run starting");
            if let Err(e) = registry.run_scheduled_commands(&announcer).await {
                logger.error_log(&e, "While running scheduled commands").await;
            }
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load .env if present
    dotenv::dotenv().ok();

    let config = Arc::new(BotConfig::from_env().context("Failed to read configuration")?);
    let file_system = Arc::new(OsFileSystem);

    let admin_config = Arc::clone(&config);
    let mut registry = BotCommandRegistry::new(
        move |user_id: &str| admin_config.is_admin(user_id),
        config.commands_dir.clone(),
        config.commands_module_root.clone(),
        file_system.clone(),
        Arc::new(handlers::command_catalog(&config.commands_module_root)),
    )
    .with_hooks(Arc::new(DiscordCommandHooks::new(
        config.notify_unknown_commands,
    )));
    registry
        .load_all_commands()
        .context("Failed to load commands")?;

    let listeners = Arc::new(ListenerTable::new());
    let events = EventRegistry::<BotEventListener>::new(
        config.events_dir.clone(),
        config.events_module_root.clone(),
        file_system,
        Arc::new(handlers::event_catalog(&config.events_module_root)),
    );
    let listener_count = events
        .load_all_events(|name, listener| listeners.add_listener(name, listener))
        .context("Failed to load event listeners")?;
    tracing::info!(listeners = listener_count, "Loaded event listeners");

    let registry = Arc::new(registry);
    let setup_config = Arc::clone(&config);

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!(user = %ready.user.name, "Bot is ready");

                let logger = Arc::new(ChannelLogger::new(
                    ctx.http.clone(),
                    setup_config.log_channel_id.map(serenity::ChannelId::new),
                ));
                let data = Data {
                    registry,
                    listeners,
                    logger,
                    config: setup_config,
                };

                match data.config.scheduled_channel_id {
                    Some(channel_id) => {
                        spawn_scheduled_runner(ctx.clone(), serenity::ChannelId::new(channel_id), &data)
                    }
                    None => tracing::info!("No SCHEDULED_CHANNEL_ID set, scheduled commands disabled"),
                }

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
