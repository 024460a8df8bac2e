// Turns raw message content into a statement plus arguments.

use super::command_models::MessageEventCore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub prefix: String,
    pub statement: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Wraps the parsed parts and the originating message into an event.
    pub fn into_event<M, K>(self, message: M) -> MessageEventCore<M, K> {
        MessageEventCore::new(self.statement, message, self.args, self.prefix)
    }
}

/// Splits `!ping a b` into statement `ping` and args `[a, b]`.
///
/// Returns `None` when the content does not start with `prefix` or nothing
/// follows it. An empty prefix never matches.
pub fn parse_command(content: &str, prefix: &str) -> Option<ParsedCommand> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.trim_start().strip_prefix(prefix)?;
    // "! ping" is not a command
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split_whitespace();
    let statement = parts.next()?.to_string();
    let args = parts.map(str::to_string).collect();

    Some(ParsedCommand {
        prefix: prefix.to_string(),
        statement,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statement_and_args() {
        let parsed = parse_command("!remind  me   later", "!").unwrap();

        assert_eq!(parsed.statement, "remind");
        assert_eq!(parsed.args, vec!["me", "later"]);
        assert_eq!(parsed.prefix, "!");
    }

    #[test]
    fn multi_character_prefix() {
        let parsed = parse_command("bot>ping", "bot>").unwrap();

        assert_eq!(parsed.statement, "ping");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn rejects_missing_prefix_or_statement() {
        assert_eq!(parse_command("ping", "!"), None);
        assert_eq!(parse_command("!", "!"), None);
        assert_eq!(parse_command("! ping", "!"), None);
        assert_eq!(parse_command("!ping", ""), None);
    }

    #[test]
    fn into_event_keeps_everything() {
        let parsed = parse_command("?roll 2d6", "?").unwrap();

        let event: MessageEventCore<&str> = parsed.into_event("raw");

        assert_eq!(event.statement, "roll");
        assert_eq!(event.args, vec!["2d6"]);
        assert_eq!(event.prefix, "?");
        assert_eq!(event.message, "raw");
        assert!(event.data.is_empty());
    }
}
