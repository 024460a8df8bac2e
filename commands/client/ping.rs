use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage};

pub struct Ping;

#[async_trait]
impl CommandHandler<BotMessage> for Ping {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        event.message.reply("Pong!").await?;
        Ok(())
    }
}
