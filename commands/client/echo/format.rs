/// Discord rejects messages above this length.
const MAX_MESSAGE_CHARS: usize = 2000;

pub fn echo_text(args: &[String]) -> Option<String> {
    if args.is_empty() {
        return None;
    }
    Some(args.join(" ").chars().take(MAX_MESSAGE_CHARS).collect())
}

pub fn usage(prefix: &str) -> String {
    format!("Usage: `{}echo <text>`", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments() {
        let args = vec!["hello".to_string(), "there".to_string()];

        assert_eq!(echo_text(&args).as_deref(), Some("hello there"));
        assert_eq!(echo_text(&[]), None);
    }

    #[test]
    fn caps_length() {
        let args = vec!["x".repeat(2500)];

        assert_eq!(echo_text(&args).unwrap().len(), 2000);
    }

    #[test]
    fn usage_uses_prefix() {
        assert_eq!(usage("?"), "Usage: `?echo <text>`");
    }
}
