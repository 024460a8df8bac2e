use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage, EmbedBuilderLocal, EmbedFieldLocal};
use poise::serenity_prelude as serenity;

pub struct About;

#[async_trait]
impl CommandHandler<BotMessage> for About {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        let embed = EmbedBuilderLocal::new()
            .title("About")
            .description("Commands and events are discovered from the `commands/` and `events/` directories.")
            .colour(serenity::Colour::BLURPLE)
            .add_fields([
                EmbedFieldLocal::new("Prefix", format!("`{}`", event.prefix)).inline(),
                EmbedFieldLocal::new("Version", env!("CARGO_PKG_VERSION")).inline(),
            ])
            .footer_text(format!("Requested by {}", event.message.message.author.name));

        embed
            .send(&event.message.ctx.http, event.message.message.channel_id)
            .await?;
        Ok(())
    }
}
