// Greets new members in the guild's system channel.

use async_trait::async_trait;
use discord_commons::core::commands::Error;
use discord_commons::core::events::EventListener;
use discord_commons::discord::GatewayEvent;
use poise::serenity_prelude as serenity;

pub struct Welcome;

#[async_trait]
impl EventListener<GatewayEvent> for Welcome {
    async fn call(&self, args: &GatewayEvent) -> Result<(), Error> {
        let serenity::FullEvent::GuildMemberAddition { new_member } = &args.event else {
            return Ok(());
        };
        if new_member.user.bot {
            return Ok(());
        }

        let system_channel = args
            .ctx
            .cache
            .guild(new_member.guild_id)
            .and_then(|guild| guild.system_channel_id);
        if let Some(channel_id) = system_channel {
            channel_id
                .say(&args.ctx.http, format!("Welcome, <@{}>!", new_member.user.id))
                .await?;
        }
        Ok(())
    }
}
