// Rewrites the scheduled-run announcement into a short report.

use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage, EmbedBuilderLocal, EmbedFieldLocal};
use poise::serenity_prelude as serenity;

pub struct Summary;

#[async_trait]
impl CommandHandler<BotMessage> for Summary {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        let fields = event.data.iter().map(|(key, value)| {
            let value = value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            EmbedFieldLocal::new(key.clone(), value)
        });
        let embed = EmbedBuilderLocal::new()
            .title("Scheduled run")
            .colour(serenity::Colour::DARK_GREEN)
            .add_fields(fields)
            .timestamp(serenity::Timestamp::now());

        let mut announcement = event.message.message.clone();
        embed
            .edit(&event.message.ctx.http, &mut announcement, "")
            .await?;
        Ok(())
    }
}
