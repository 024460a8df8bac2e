// Bot configuration read from environment variables (optionally via `.env`).

use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_COMMANDS_DIR: &str = "commands";
const DEFAULT_EVENTS_DIR: &str = "events";
const DEFAULT_SCHEDULE_INTERVAL_SECS: u64 = 60 * 60 * 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    /// Directory scanned for `client`, `admin` and `scheduled`.
    pub commands_dir: String,
    /// Prefix the command catalog is keyed by.
    pub commands_module_root: String,
    pub events_dir: String,
    pub events_module_root: String,
    pub admin_ids: HashSet<String>,
    pub scheduled_channel_id: Option<u64>,
    pub schedule_interval: Duration,
    pub log_channel_id: Option<u64>,
    pub notify_unknown_commands: bool,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let commands_dir = get("COMMANDS_DIR").unwrap_or_else(|| DEFAULT_COMMANDS_DIR.to_string());
        let events_dir = get("EVENTS_DIR").unwrap_or_else(|| DEFAULT_EVENTS_DIR.to_string());

        let admin_ids = get("ADMIN_IDS")
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let schedule_interval = match get("SCHEDULE_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(parse_nonzero("SCHEDULE_INTERVAL_SECS", &raw)?),
            None => Duration::from_secs(DEFAULT_SCHEDULE_INTERVAL_SECS),
        };

        let notify_unknown_commands = match get("NOTIFY_UNKNOWN_COMMANDS") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| ConfigError::Invalid {
                key: "NOTIFY_UNKNOWN_COMMANDS",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            token,
            prefix: get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            commands_module_root: get("COMMANDS_MODULE_ROOT").unwrap_or_else(|| commands_dir.clone()),
            commands_dir,
            events_module_root: get("EVENTS_MODULE_ROOT").unwrap_or_else(|| events_dir.clone()),
            events_dir,
            admin_ids,
            scheduled_channel_id: get("SCHEDULED_CHANNEL_ID")
                .map(|raw| parse_nonzero("SCHEDULED_CHANNEL_ID", &raw))
                .transpose()?,
            schedule_interval,
            log_channel_id: get("LOG_CHANNEL_ID")
                .map(|raw| parse_nonzero("LOG_CHANNEL_ID", &raw))
                .transpose()?,
            notify_unknown_commands,
        })
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_ids.contains(user_id)
    }
}

/// Channel ids and the schedule interval must be positive.
fn parse_nonzero(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::Missing("DISCORD_TOKEN"));
        assert_eq!(
            config(&[("DISCORD_TOKEN", "  ")]).unwrap_err(),
            ConfigError::Missing("DISCORD_TOKEN")
        );
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("DISCORD_TOKEN", "t")]).unwrap();

        assert_eq!(cfg.prefix, "!");
        assert_eq!(cfg.commands_dir, "commands");
        assert_eq!(cfg.commands_module_root, "commands");
        assert_eq!(cfg.events_dir, "events");
        assert_eq!(cfg.events_module_root, "events");
        assert!(cfg.admin_ids.is_empty());
        assert_eq!(cfg.scheduled_channel_id, None);
        assert_eq!(cfg.schedule_interval, Duration::from_secs(86_400));
        assert!(!cfg.notify_unknown_commands);
    }

    #[test]
    fn module_roots_follow_directories_unless_set() {
        let cfg = config(&[
            ("DISCORD_TOKEN", "t"),
            ("COMMANDS_DIR", "bot/cmds"),
            ("EVENTS_DIR", "bot/events"),
            ("EVENTS_MODULE_ROOT", "events"),
        ])
        .unwrap();

        assert_eq!(cfg.commands_module_root, "bot/cmds");
        assert_eq!(cfg.events_module_root, "events");
    }

    #[test]
    fn admin_ids_are_comma_separated() {
        let cfg = config(&[("DISCORD_TOKEN", "t"), ("ADMIN_IDS", " 42, 7 ,,")]).unwrap();

        assert!(cfg.is_admin("42"));
        assert!(cfg.is_admin("7"));
        assert!(!cfg.is_admin(""));
        assert_eq!(cfg.admin_ids.len(), 2);
    }

    #[test]
    fn numeric_values_are_validated() {
        let err = config(&[("DISCORD_TOKEN", "t"), ("SCHEDULED_CHANNEL_ID", "general")])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SCHEDULED_CHANNEL_ID",
                value: "general".to_string()
            }
        );

        let cfg = config(&[
            ("DISCORD_TOKEN", "t"),
            ("SCHEDULED_CHANNEL_ID", "123"),
            ("LOG_CHANNEL_ID", "456"),
            ("SCHEDULE_INTERVAL_SECS", "90"),
            ("NOTIFY_UNKNOWN_COMMANDS", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.scheduled_channel_id, Some(123));
        assert_eq!(cfg.log_channel_id, Some(456));
        assert_eq!(cfg.schedule_interval, Duration::from_secs(90));
        assert!(cfg.notify_unknown_commands);
    }

    #[test]
    fn zero_is_rejected() {
        let err = config(&[("DISCORD_TOKEN", "t"), ("SCHEDULE_INTERVAL_SECS", "0")]).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SCHEDULE_INTERVAL_SECS",
                value: "0".to_string()
            }
        );
    }
}
