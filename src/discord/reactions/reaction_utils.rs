// Reaction menus: add emoji to a message and react to users clicking them.

use futures::future::BoxFuture;
use futures::StreamExt;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_COLLECTOR_TIMEOUT: Duration = Duration::from_secs(30);

pub type ReactionFilter = Arc<dyn Fn(&serenity::Reaction) -> bool + Send + Sync>;
pub type EndCallback = Box<dyn FnOnce(Vec<serenity::Reaction>) -> BoxFuture<'static, ()> + Send>;

pub struct ReactionOptions {
    /// Emoji added to the message, in order.
    pub reactions: Vec<String>,
    /// Users allowed to trigger the callback. Empty means anyone.
    /// Ignored when `filter` is set.
    pub reaction_user_ids: Vec<serenity::UserId>,
    pub filter: Option<ReactionFilter>,
    /// Runs with everything collected once the collector times out.
    /// Without it the message's reactions are cleared.
    pub on_end: Option<EndCallback>,
    pub timeout: Duration,
}

impl ReactionOptions {
    pub fn new(reactions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            reactions: reactions.into_iter().map(Into::into).collect(),
            reaction_user_ids: Vec::new(),
            filter: None,
            on_end: None,
            timeout: DEFAULT_COLLECTOR_TIMEOUT,
        }
    }

    pub fn users(mut self, user_ids: Vec<serenity::UserId>) -> Self {
        self.reaction_user_ids = user_ids;
        self
    }

    pub fn filter(mut self, filter: ReactionFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn on_end(mut self, on_end: EndCallback) -> Self {
        self.on_end = Some(on_end);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct ReactionUtils {
    bot_id: serenity::UserId,
}

impl ReactionUtils {
    pub fn new(bot_id: serenity::UserId) -> Self {
        Self { bot_id }
    }

    /// Starts a reaction collector on `message`, then adds every reaction.
    ///
    /// `on_collect` runs for each reaction passing the filter until the
    /// timeout. The returned handle finishes after the end callback ran.
    pub async fn attach_reactions_to_message<F>(
        &self,
        ctx: &serenity::Context,
        message: &serenity::Message,
        options: ReactionOptions,
        on_collect: F,
    ) -> Result<JoinHandle<()>, serenity::Error>
    where
        F: Fn(serenity::Reaction) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        let filter = match options.filter {
            Some(filter) => filter,
            None => self.default_filter(&options.reaction_user_ids, &options.reactions),
        };

        let stream = serenity::ReactionCollector::new(ctx)
            .message_id(message.id)
            .timeout(options.timeout)
            .filter(move |reaction| filter(reaction))
            .stream();

        let http = Arc::clone(&ctx.http);
        let channel_id = message.channel_id;
        let message_id = message.id;
        let on_end = options.on_end;

        let handle = tokio::spawn(async move {
            let mut stream = Box::pin(stream);
            let mut collected = Vec::new();
            while let Some(reaction) = stream.next().await {
                collected.push(reaction.clone());
                on_collect(reaction).await;
            }

            match on_end {
                Some(on_end) => on_end(collected).await,
                None => {
                    if let Err(e) = http.delete_message_reactions(channel_id, message_id).await {
                        tracing::warn!(%message_id, "Failed to clear reactions: {}", e);
                    }
                }
            }
        });

        for reaction in &options.reactions {
            let emoji = serenity::ReactionType::Unicode(reaction.clone());
            if let Err(e) = message.react(&ctx.http, emoji).await {
                handle.abort();
                return Err(e);
            }
        }

        Ok(handle)
    }

    fn default_filter(&self, allowed_users: &[serenity::UserId], reactions: &[String]) -> ReactionFilter {
        let allowed_users = allowed_users.to_vec();
        let reactions = reactions.to_vec();
        let bot_id = self.bot_id;

        Arc::new(move |reaction: &serenity::Reaction| {
            reaction_allowed(
                reaction.user_id,
                &reaction.emoji,
                &allowed_users,
                &reactions,
                bot_id,
            )
        })
    }
}

/// The default filter: a listed emoji, from an allowed user, never the bot.
pub fn reaction_allowed(
    user_id: Option<serenity::UserId>,
    emoji: &serenity::ReactionType,
    allowed_users: &[serenity::UserId],
    reactions: &[String],
    bot_id: serenity::UserId,
) -> bool {
    let Some(user_id) = user_id else {
        return false;
    };
    if user_id == bot_id {
        return false;
    }
    if !allowed_users.is_empty() && !allowed_users.contains(&user_id) {
        return false;
    }

    let name = match emoji {
        serenity::ReactionType::Unicode(name) => name.as_str(),
        serenity::ReactionType::Custom {
            name: Some(name), ..
        } => name.as_str(),
        _ => return false,
    };
    reactions.iter().any(|r| r == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> serenity::UserId {
        serenity::UserId::new(1)
    }

    fn thumbs() -> serenity::ReactionType {
        serenity::ReactionType::Unicode("👍".to_string())
    }

    fn listed() -> Vec<String> {
        vec!["👍".to_string(), "👎".to_string()]
    }

    #[test]
    fn anyone_may_react_when_no_users_are_listed() {
        let user = serenity::UserId::new(5);

        assert!(reaction_allowed(Some(user), &thumbs(), &[], &listed(), bot()));
    }

    #[test]
    fn bot_and_unknown_users_are_rejected() {
        assert!(!reaction_allowed(Some(bot()), &thumbs(), &[], &listed(), bot()));
        assert!(!reaction_allowed(None, &thumbs(), &[], &listed(), bot()));
    }

    #[test]
    fn user_list_restricts_who_may_react() {
        let owner = serenity::UserId::new(7);
        let stranger = serenity::UserId::new(8);

        assert!(reaction_allowed(Some(owner), &thumbs(), &[owner], &listed(), bot()));
        assert!(!reaction_allowed(Some(stranger), &thumbs(), &[owner], &listed(), bot()));
    }

    #[test]
    fn only_listed_emoji_count() {
        let user = serenity::UserId::new(5);
        let other = serenity::ReactionType::Unicode("🎉".to_string());

        assert!(!reaction_allowed(Some(user), &other, &[], &listed(), bot()));
    }

    #[test]
    fn options_default_to_thirty_seconds() {
        let options = ReactionOptions::new(["✅", "❌"]);

        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.reactions, vec!["✅", "❌"]);
        assert!(options.filter.is_none());
        assert!(options.reaction_user_ids.is_empty());
    }
}
