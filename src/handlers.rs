// Compiled-in command and event handlers.
//
// The sources live under `commands/` and `events/` so the directory scan finds
// them; the catalogs below key each handler by the module path the loaders
// ask for. Dropping a file from the tree disables its handler.

use discord_commons::core::loading::join_module_path;
use discord_commons::discord::{BotCommand, BotEventListener};
use discord_commons::infra::StaticModuleCatalog;
use std::sync::Arc;

#[path = "../commands/client/about.rs"]
mod client_about;
#[path = "../commands/client/echo/echo.rs"]
mod client_echo;
#[path = "../commands/client/ping.rs"]
mod client_ping;
#[path = "../commands/client/poll.rs"]
mod client_poll;

#[path = "../commands/admin/ping.rs"]
mod admin_ping;

#[path = "../commands/scheduled/heartbeat.rs"]
mod scheduled_heartbeat;
#[path = "../commands/scheduled/summary.rs"]
mod scheduled_summary;

#[path = "../events/guild_member_addition.rs"]
mod event_guild_member_addition;
#[path = "../events/ready.rs"]
mod event_ready;

pub fn command_catalog(module_root: &str) -> StaticModuleCatalog<BotCommand> {
    let path = |segments: &[&str]| {
        let mut full = vec![module_root];
        full.extend_from_slice(segments);
        join_module_path(&full)
    };

    let mut catalog: StaticModuleCatalog<BotCommand> = StaticModuleCatalog::new();
    catalog
        .register(&path(&["client", "about.rs"]), Arc::new(client_about::About))
        .register(&path(&["client", "echo", "echo.rs"]), Arc::new(client_echo::Echo))
        .register(&path(&["client", "ping.rs"]), Arc::new(client_ping::Ping))
        .register(&path(&["client", "poll.rs"]), Arc::new(client_poll::Poll))
        .register(&path(&["admin", "ping.rs"]), Arc::new(admin_ping::AdminPing))
        .register(
            &path(&["scheduled", "heartbeat.rs"]),
            Arc::new(scheduled_heartbeat::Heartbeat),
        )
        .register(
            &path(&["scheduled", "summary.rs"]),
            Arc::new(scheduled_summary::Summary),
        );
    catalog
}

pub fn event_catalog(module_root: &str) -> StaticModuleCatalog<BotEventListener> {
    let mut catalog: StaticModuleCatalog<BotEventListener> = StaticModuleCatalog::new();
    catalog
        .register(
            &join_module_path(&[module_root, "guild_member_addition.rs"]),
            Arc::new(event_guild_member_addition::Welcome),
        )
        .register(
            &join_module_path(&[module_root, "ready.rs"]),
            Arc::new(event_ready::Ready),
        );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use discord_commons::core::events::EventRegistry;
    use discord_commons::discord::{BotCommandRegistry, ListenerTable};
    use discord_commons::infra::OsFileSystem;
    use std::path::Path;

    fn crate_dir(name: &str) -> String {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn every_command_file_has_a_handler() {
        let mut registry = BotCommandRegistry::new(
            |id: &str| id == "1",
            crate_dir("commands"),
            "commands",
            Arc::new(OsFileSystem),
            Arc::new(command_catalog("commands")),
        );

        let summary = registry.load_all_commands().unwrap();

        assert_eq!(summary.client, 4);
        assert_eq!(summary.admin, 1);
        assert_eq!(summary.scheduled, 2);
        assert!(registry.get_command("echo", "2").is_found());
        assert!(registry.get_command("ping", "1").is_admin_command);
        let order: Vec<_> = registry.scheduled_commands().keys().cloned().collect();
        assert_eq!(order, vec!["heartbeat", "summary"]);
    }

    #[test]
    fn every_event_file_has_a_listener() {
        let events = EventRegistry::<BotEventListener>::new(
            crate_dir("events"),
            "events",
            Arc::new(OsFileSystem),
            Arc::new(event_catalog("events")),
        );
        let table = ListenerTable::new();

        let count = events
            .load_all_events(|name, listener| table.add_listener(name, listener))
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(table.listener_count("ready"), 1);
        assert_eq!(table.listener_count("guild_member_addition"), 1);
    }
}
