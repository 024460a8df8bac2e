// Shadows the client `ping` for admins.

use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage};

pub struct AdminPing;

#[async_trait]
impl CommandHandler<BotMessage> for AdminPing {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        let guilds = event.message.ctx.cache.guilds().len();
        event
            .message
            .reply(format!("Pong! Serving {} guilds.", guilds))
            .await?;
        Ok(())
    }
}
