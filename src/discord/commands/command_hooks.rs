// Hooks the bot installs around command execution.

use crate::core::commands::{CommandHooks, CommandMessage, Error};
use crate::discord::adapters::{BotEvent, BotMessage};
use async_trait::async_trait;

pub struct DiscordCommandHooks {
    /// Reply to unknown commands instead of staying silent.
    notify_unknown: bool,
}

impl DiscordCommandHooks {
    pub fn new(notify_unknown: bool) -> Self {
        Self { notify_unknown }
    }
}

#[async_trait]
impl CommandHooks<BotMessage> for DiscordCommandHooks {
    async fn post_command_execution(
        &self,
        event: &BotEvent,
        is_admin_command: bool,
    ) -> Result<(), Error> {
        tracing::info!(
            command = %event.statement,
            user_id = %event.message.author_id(),
            admin = is_admin_command,
            "Command executed"
        );
        Ok(())
    }

    async fn command_not_found(&self, event: &BotEvent) -> Result<(), Error> {
        if self.notify_unknown {
            event
                .message
                .reply(unknown_command_reply(&event.prefix, &event.statement))
                .await?;
        }
        Ok(())
    }
}

pub fn unknown_command_reply(prefix: &str, statement: &str) -> String {
    format!("Unknown command `{}{}`.", prefix, statement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_names_the_command() {
        assert_eq!(unknown_command_reply("!", "pnig"), "Unknown command `!pnig`.");
    }
}
