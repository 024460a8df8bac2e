// Logging to a Discord channel, mirrored to tracing.

use crate::discord::embeds::{EmbedBuilderLocal, EmbedFieldLocal};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::fmt::Display;
use std::sync::Arc;

/// Discord's limit for an embed description.
const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Each method returns the message posted, if any.
#[async_trait]
pub trait BotLogger: Send + Sync {
    async fn error_log(
        &self,
        error: &(dyn Display + Sync),
        additional_info: &str,
    ) -> Option<serenity::Message>;

    async fn info_log(&self, info: &str) -> Option<serenity::Message>;

    async fn debug_log(&self, error: &(dyn Display + Sync)) -> Option<serenity::Message>;
}

/// Posts to `channel_id` when one is configured. Always writes to tracing.
pub struct ChannelLogger {
    http: Arc<serenity::Http>,
    channel_id: Option<serenity::ChannelId>,
}

impl ChannelLogger {
    pub fn new(http: Arc<serenity::Http>, channel_id: Option<serenity::ChannelId>) -> Self {
        Self { http, channel_id }
    }

    async fn post(&self, embed: EmbedBuilderLocal) -> Option<serenity::Message> {
        let channel_id = self.channel_id?;
        match embed.send(&self.http, channel_id).await {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!(%channel_id, "Failed to post to log channel: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl BotLogger for ChannelLogger {
    async fn error_log(
        &self,
        error: &(dyn Display + Sync),
        additional_info: &str,
    ) -> Option<serenity::Message> {
        let error = error.to_string();
        tracing::error!(info = additional_info, "{}", error);
        self.post(error_embed(&error, additional_info)).await
    }

    async fn info_log(&self, info: &str) -> Option<serenity::Message> {
        tracing::info!("{}", info);
        self.post(
            EmbedBuilderLocal::new()
                .description(truncate_chars(info, MAX_DESCRIPTION_CHARS))
                .colour(serenity::Colour::BLUE)
                .timestamp(serenity::Timestamp::now()),
        )
        .await
    }

    async fn debug_log(&self, error: &(dyn Display + Sync)) -> Option<serenity::Message> {
        let error = error.to_string();
        tracing::debug!("{}", error);
        self.post(
            EmbedBuilderLocal::new()
                .title("Debug")
                .description(code_block(&error))
                .colour(serenity::Colour::LIGHT_GREY),
        )
        .await
    }
}

pub fn error_embed(error: &str, additional_info: &str) -> EmbedBuilderLocal {
    let mut embed = EmbedBuilderLocal::new()
        .title("Error")
        .description(code_block(error))
        .colour(serenity::Colour::RED)
        .timestamp(serenity::Timestamp::now());
    if !additional_info.is_empty() {
        embed = embed.add_fields([EmbedFieldLocal::new("Info", truncate_chars(additional_info, 1024))]);
    }
    embed
}

fn code_block(text: &str) -> String {
    // 8 chars of fences and newlines
    format!("```\n{}\n```", truncate_chars(text, MAX_DESCRIPTION_CHARS - 8))
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_embed_carries_info_field() {
        let embed = error_embed("boom", "while running ping");

        assert_eq!(
            embed.fields(),
            &[EmbedFieldLocal::new("Info", "while running ping")]
        );
        assert_eq!(embed.data().unwrap()["description"], "```\nboom\n```");
    }

    #[test]
    fn empty_info_adds_no_field() {
        assert!(error_embed("boom", "").fields().is_empty());
    }

    #[test]
    fn long_text_is_truncated_on_char_boundaries() {
        let text = "é".repeat(10);

        let truncated = truncate_chars(&text, 6);

        assert_eq!(truncated, "ééé...");
        assert_eq!(truncate_chars("short", 6), "short");
    }
}
