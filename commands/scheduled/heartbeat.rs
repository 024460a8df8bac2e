use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage};

/// Side-channel key read by the `summary` scheduled command.
pub const HEARTBEAT_KEY: &str = "heartbeat_at";

pub struct Heartbeat;

#[async_trait]
impl CommandHandler<BotMessage> for Heartbeat {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        let now = chrono::Utc::now();
        event.data.insert(
            HEARTBEAT_KEY.to_string(),
            serde_json::Value::String(now.to_rfc3339()),
        );
        tracing::info!(at = %now, "Heartbeat");
        Ok(())
    }
}
