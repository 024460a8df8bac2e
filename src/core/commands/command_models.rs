// Domain types shared by every command handler.
//
// Nothing here knows about Discord. The message type is a generic `M` that
// only has to tell us who sent it, so the same registry drives serenity
// messages in the bot and plain structs in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Error type returned by handlers and hooks.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Statement given to the synthetic event of a scheduled run.
pub const SCHEDULED_STATEMENT: &str = "general";

/// Text posted to the channel before the scheduled commands run.
pub const SCHEDULED_ANNOUNCEMENT: &str = "running scheduled commands....";

// ============================================================================
// DOMAIN MODELS
// ============================================================================

/// Everything a handler receives for one invocation.
#[derive(Debug, Clone)]
pub struct MessageEventCore<M, K = String> {
    /// The command name.
    pub statement: String,
    /// The message that triggered the command.
    pub message: M,
    /// Whitespace separated arguments after the statement.
    pub args: Vec<String>,
    /// The prefix used.
    pub prefix: String,
    /// Side-channel for handlers cooperating on the same invocation.
    pub data: HashMap<K, serde_json::Value>,
}

impl<M, K> MessageEventCore<M, K> {
    pub fn new(
        statement: impl Into<String>,
        message: M,
        args: Vec<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            statement: statement.into(),
            message,
            args,
            prefix: prefix.into(),
            data: HashMap::new(),
        }
    }
}

/// The three command tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Client,
    Admin,
    Scheduled,
}

impl CommandCategory {
    /// Name of the directory holding this category under the commands root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            CommandCategory::Client => "client",
            CommandCategory::Admin => "admin",
            CommandCategory::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Result of a command lookup.
pub struct CommandResponse<M, K = String> {
    pub command: Option<Arc<dyn CommandHandler<M, K>>>,
    /// Set when `command` came out of the admin table.
    pub is_admin_command: bool,
}

impl<M, K> CommandResponse<M, K> {
    pub fn not_found() -> Self {
        Self {
            command: None,
            is_admin_command: false,
        }
    }

    pub fn is_found(&self) -> bool {
        self.command.is_some()
    }
}

impl<M, K> fmt::Debug for CommandResponse<M, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandResponse")
            .field("found", &self.command.is_some())
            .field("is_admin_command", &self.is_admin_command)
            .finish()
    }
}

/// Something recorded during a successful load that the host may want to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    MissingAdminDirectory,
}

/// What a `load_all_commands` pass registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub client: usize,
    pub admin: usize,
    pub scheduled: usize,
    pub warnings: Vec<LoadWarning>,
}

// ============================================================================
// PORTS
// ============================================================================

/// A compiled-in command.
#[async_trait]
pub trait CommandHandler<M, K = String>: Send + Sync {
    async fn run(&self, event: &mut MessageEventCore<M, K>) -> Result<(), Error>;
}

/// Callbacks around `CommandRegistry::execute`. Both default to doing nothing.
#[async_trait]
pub trait CommandHooks<M, K = String>: Send + Sync
where
    M: Send + Sync,
    K: Send + Sync,
{
    /// Called after a handler finished without error.
    async fn post_command_execution(
        &self,
        _event: &MessageEventCore<M, K>,
        _is_admin_command: bool,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Called when no table holds the statement.
    async fn command_not_found(&self, _event: &MessageEventCore<M, K>) -> Result<(), Error> {
        Ok(())
    }
}

pub struct NoopHooks;

impl<M, K> CommandHooks<M, K> for NoopHooks
where
    M: Send + Sync,
    K: Send + Sync,
{
}

/// The only thing the registry needs to know about a message.
pub trait CommandMessage: Send + Sync {
    fn author_id(&self) -> String;
}

/// Where the scheduled-run announcement is posted.
#[async_trait]
pub trait AnnouncementChannel<M>: Send + Sync {
    /// Sends `content` and returns the message that was created.
    async fn send_text(&self, content: &str) -> Result<M, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_directories() {
        assert_eq!(CommandCategory::Client.dir_name(), "client");
        assert_eq!(CommandCategory::Admin.to_string(), "admin");
        assert_eq!(CommandCategory::Scheduled.dir_name(), "scheduled");
    }

    #[test]
    fn new_event_has_empty_side_channel() {
        let event: MessageEventCore<(), String> =
            MessageEventCore::new("ping", (), vec!["a".into()], "!");

        assert_eq!(event.statement, "ping");
        assert_eq!(event.args, vec!["a"]);
        assert_eq!(event.prefix, "!");
        assert!(event.data.is_empty());
    }

    #[test]
    fn not_found_response_is_not_admin() {
        let response: CommandResponse<(), String> = CommandResponse::not_found();

        assert!(!response.is_found());
        assert!(!response.is_admin_command);
    }
}
