// Loads a real directory tree through the OS file system and a static catalog.

use async_trait::async_trait;
use discord_commons::core::commands::{
    AnnouncementChannel, CommandHandler, CommandMessage, CommandRegistry, Error, LoadWarning,
    MessageEventCore,
};
use discord_commons::core::events::{EventListener, EventRegistry};
use discord_commons::core::loading::{join_module_path, LoadError};
use discord_commons::infra::{OsFileSystem, StaticModuleCatalog};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Debug, Clone)]
struct Note {
    author: String,
    text: String,
}

impl CommandMessage for Note {
    fn author_id(&self) -> String {
        self.author.clone()
    }
}

/// Appends `<name>:<statement>` to a shared log and tags the event data.
struct Tagging {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CommandHandler<Note> for Tagging {
    async fn run(&self, event: &mut MessageEventCore<Note>) -> Result<(), Error> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}:{}", self.name, event.statement, event.message.text));
        let seen = event.data.len();
        event
            .data
            .insert(self.name.to_string(), serde_json::json!(seen));
        Ok(())
    }
}

struct Board;

#[async_trait]
impl AnnouncementChannel<Note> for Board {
    async fn send_text(&self, content: &str) -> Result<Note, Error> {
        Ok(Note {
            author: "bot".to_string(),
            text: content.to_string(),
        })
    }
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn catalog(log: &Arc<Mutex<Vec<String>>>) -> StaticModuleCatalog<dyn CommandHandler<Note>> {
    let mut catalog: StaticModuleCatalog<dyn CommandHandler<Note>> = StaticModuleCatalog::new();
    for (path, name) in [
        ("client/ping.rs", "client-ping"),
        ("client/weather/weather.rs", "weather"),
        ("admin/ping.rs", "admin-ping"),
        ("scheduled/a_first.rs", "first"),
        ("scheduled/b_second.rs", "second"),
    ] {
        catalog.register(
            &join_module_path(&["bot", path]),
            Arc::new(Tagging {
                name,
                log: Arc::clone(log),
            }),
        );
    }
    catalog
}

fn registry(root: &Path, log: &Arc<Mutex<Vec<String>>>) -> CommandRegistry<Note> {
    CommandRegistry::new(
        |id: &str| id == "admin",
        root,
        "bot",
        Arc::new(OsFileSystem),
        Arc::new(catalog(log)),
    )
}

fn note(author: &str, text: &str) -> Note {
    Note {
        author: author.to_string(),
        text: text.to_string(),
    }
}

#[tokio::test]
async fn loads_tree_and_dispatches() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "client/ping.rs");
    touch(dir.path(), "client/README.md");
    touch(dir.path(), "client/weather/weather.rs");
    touch(dir.path(), "client/weather/forecast.rs");
    touch(dir.path(), "admin/ping.rs");
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = registry(dir.path(), &log);

    let summary = registry.load_all_commands().unwrap();

    assert_eq!((summary.client, summary.admin, summary.scheduled), (2, 1, 0));
    assert!(summary.warnings.is_empty());

    let mut event = MessageEventCore::new("ping", note("admin", "!ping"), Vec::new(), "!");
    registry.execute(&mut event).await.unwrap();
    let mut event = MessageEventCore::new("ping", note("someone", "!ping"), Vec::new(), "!");
    registry.execute(&mut event).await.unwrap();
    let mut event = MessageEventCore::new("weather", note("admin", "!weather"), Vec::new(), "!");
    registry.execute(&mut event).await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "admin-ping:ping:!ping",
            "client-ping:ping:!ping",
            "weather:weather:!weather",
        ]
    );
}

#[tokio::test]
async fn scheduled_commands_share_one_event() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "client/ping.rs");
    touch(dir.path(), "scheduled/b_second.rs");
    touch(dir.path(), "scheduled/a_first.rs");
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = registry(dir.path(), &log);

    let summary = registry.load_all_commands().unwrap();
    assert_eq!(summary.warnings, vec![LoadWarning::MissingAdminDirectory]);

    registry.run_scheduled_commands(&Board).await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "first:general:running scheduled commands....",
            "second:general:running scheduled commands....",
        ]
    );
}

#[test]
fn missing_client_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "admin/ping.rs");
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = registry(dir.path(), &log);

    let err = registry.load_all_commands().unwrap_err();

    assert!(matches!(err, LoadError::Scan { .. }));
    assert!(registry.admin_commands().is_empty());
}

#[test]
fn nested_package_is_rejected() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "client/weather/weather.rs");
    touch(dir.path(), "client/weather/extra/more.rs");
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = registry(dir.path(), &log);

    let err = registry.load_all_commands().unwrap_err();

    assert!(matches!(err, LoadError::UnsupportedStructure(path) if path.ends_with("weather")));
}

struct Counter(Arc<Mutex<u32>>);

#[async_trait]
impl EventListener<u32> for Counter {
    async fn call(&self, args: &u32) -> Result<(), Error> {
        *self.0.lock().unwrap() += args;
        Ok(())
    }
}

#[tokio::test]
async fn events_register_under_file_stem() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "ready.rs");
    touch(dir.path(), "message.handler.rs");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "nested/ignored.rs");
    let total = Arc::new(Mutex::new(0));
    let mut catalog: StaticModuleCatalog<dyn EventListener<u32>> = StaticModuleCatalog::new();
    catalog
        .register("events/ready.rs", Arc::new(Counter(Arc::clone(&total))))
        .register("events/message.handler.rs", Arc::new(Counter(Arc::clone(&total))));
    let events = EventRegistry::<dyn EventListener<u32>>::new(
        dir.path(),
        "events",
        Arc::new(OsFileSystem),
        Arc::new(catalog),
    );

    let mut registered = Vec::new();
    let count = events
        .load_all_events(|name, listener| registered.push((name.to_string(), listener)))
        .unwrap();

    assert_eq!(count, 2);
    let mut names: Vec<_> = registered.iter().map(|(name, _)| name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["message", "ready"]);

    for (_, listener) in &registered {
        listener.call(&5).await.unwrap();
    }
    assert_eq!(*total.lock().unwrap(), 10);
}
