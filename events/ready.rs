use async_trait::async_trait;
use discord_commons::core::commands::Error;
use discord_commons::core::events::EventListener;
use discord_commons::discord::GatewayEvent;
use poise::serenity_prelude as serenity;

pub struct Ready;

#[async_trait]
impl EventListener<GatewayEvent> for Ready {
    async fn call(&self, args: &GatewayEvent) -> Result<(), Error> {
        if let serenity::FullEvent::Ready { data_about_bot } = &args.event {
            tracing::info!(
                user = %data_about_bot.user.name,
                guilds = data_about_bot.guilds.len(),
                "Connected to gateway"
            );
            let activity = serenity::ActivityData::listening("commands");
            args.ctx
                .set_presence(Some(activity), serenity::OnlineStatus::Online);
        }
        Ok(())
    }
}
