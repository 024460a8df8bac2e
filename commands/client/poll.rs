// `!poll <question>`: posts the question and counts 👍/👎 for a minute.

use async_trait::async_trait;
use discord_commons::core::commands::{CommandHandler, Error};
use discord_commons::discord::{BotEvent, BotMessage, ReactionOptions, ReactionUtils};
use futures::FutureExt;
use poise::serenity_prelude as serenity;
use std::time::Duration;

const YES: &str = "👍";
const NO: &str = "👎";

pub struct Poll;

#[async_trait]
impl CommandHandler<BotMessage> for Poll {
    async fn run(&self, event: &mut BotEvent) -> Result<(), Error> {
        if event.args.is_empty() {
            event
                .message
                .reply(format!("Usage: `{}poll <question>`", event.prefix))
                .await?;
            return Ok(());
        }

        let question = event.args.join(" ");
        let poll = event.message.say(format!("📊 {}", question)).await?;

        let ctx = &event.message.ctx;
        let http = ctx.http.clone();
        let channel_id = poll.message.channel_id;
        let options = ReactionOptions::new([YES, NO])
            .timeout(Duration::from_secs(60))
            .on_end(Box::new(move |collected: Vec<serenity::Reaction>| {
                async move {
                    let yes = collected.iter().filter(|r| is_emoji(r, YES)).count();
                    let no = collected.iter().filter(|r| is_emoji(r, NO)).count();
                    let summary = format!("Poll closed: {} {} / {} {}", YES, yes, NO, no);
                    if let Err(e) = channel_id.say(&http, summary).await {
                        tracing::warn!("Failed to post poll results: {}", e);
                    }
                }
                .boxed()
            }));

        let utils = ReactionUtils::new(ctx.cache.current_user().id);
        utils
            .attach_reactions_to_message(ctx, &poll.message, options, |reaction| {
                async move {
                    tracing::debug!(user_id = ?reaction.user_id, "Poll vote");
                }
                .boxed()
            })
            .await?;
        Ok(())
    }
}

fn is_emoji(reaction: &serenity::Reaction, name: &str) -> bool {
    matches!(&reaction.emoji, serenity::ReactionType::Unicode(emoji) if emoji == name)
}
