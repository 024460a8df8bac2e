// Adapters that let serenity types flow through the core registry.
//
// A serenity `Message` cannot reply on its own, so handlers get the message
// together with the gateway `Context` it arrived on.

use crate::core::commands::{
    AnnouncementChannel, CommandHandler, CommandMessage, CommandRegistry, Error, MessageEventCore,
};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

pub type BotEvent = MessageEventCore<BotMessage>;
pub type BotCommand = dyn CommandHandler<BotMessage>;
pub type BotCommandRegistry = CommandRegistry<BotMessage>;

#[derive(Clone)]
pub struct BotMessage {
    pub ctx: serenity::Context,
    pub message: serenity::Message,
}

impl BotMessage {
    pub fn new(ctx: serenity::Context, message: serenity::Message) -> Self {
        Self { ctx, message }
    }

    /// Replies to this message and returns the reply.
    pub async fn reply(&self, content: impl Into<String>) -> Result<BotMessage, serenity::Error> {
        let sent = self.message.reply(&self.ctx.http, content).await?;
        Ok(Self::new(self.ctx.clone(), sent))
    }

    /// Posts to the same channel without referencing this message.
    pub async fn say(&self, content: impl Into<String>) -> Result<BotMessage, serenity::Error> {
        let sent = self.message.channel_id.say(&self.ctx.http, content).await?;
        Ok(Self::new(self.ctx.clone(), sent))
    }
}

impl CommandMessage for BotMessage {
    fn author_id(&self) -> String {
        self.message.author.id.to_string()
    }
}

/// The channel scheduled runs are announced in.
#[derive(Clone)]
pub struct ChannelAnnouncer {
    pub ctx: serenity::Context,
    pub channel_id: serenity::ChannelId,
}

impl ChannelAnnouncer {
    pub fn new(ctx: serenity::Context, channel_id: serenity::ChannelId) -> Self {
        Self { ctx, channel_id }
    }
}

#[async_trait]
impl AnnouncementChannel<BotMessage> for ChannelAnnouncer {
    async fn send_text(&self, content: &str) -> Result<BotMessage, Error> {
        let message = self.channel_id.say(&self.ctx.http, content).await?;
        Ok(BotMessage::new(self.ctx.clone(), message))
    }
}
