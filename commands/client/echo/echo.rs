// Package-style command: `echo.rs` is the entry file, `format.rs` a helper.

use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage};

#[path = "format.rs"]
mod format;

pub struct Echo;

#[async_trait]
impl CommandHandler<BotMessage> for Echo {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        let reply = match format::echo_text(&event.args) {
            Some(text) => text,
            None => format::usage(&event.prefix),
        };
        event.message.reply(reply).await?;
        Ok(())
    }
}
