// The command registry: builds the client/admin/scheduled tables from a
// directory tree and dispatches statements against them.

use super::command_models::{
    AnnouncementChannel, CommandCategory, CommandHandler, CommandHooks, CommandMessage,
    CommandResponse, Error, LoadSummary, LoadWarning, MessageEventCore, NoopHooks,
    SCHEDULED_ANNOUNCEMENT, SCHEDULED_STATEMENT,
};
use crate::core::loading::{
    handler_name, join_module_path, FileSystem, LoadError, ModuleLoader, ModuleScanner,
    DEFAULT_MODULE_EXTENSION,
};
use indexmap::IndexMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Name → handler, in registration order.
pub type CommandTable<M, K = String> = IndexMap<String, Arc<dyn CommandHandler<M, K>>>;

type AdminPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct CommandRegistry<M, K = String>
where
    M: CommandMessage + 'static,
    K: Send + Sync + 'static,
{
    client_commands: CommandTable<M, K>,
    admin_commands: CommandTable<M, K>,
    scheduled_commands: CommandTable<M, K>,
    is_admin: AdminPredicate,
    /// Where the category directories live on disk.
    commands_root: PathBuf,
    /// Prefix of the module paths handed to the loader.
    module_root: String,
    scanner: ModuleScanner,
    loader: Arc<dyn ModuleLoader<dyn CommandHandler<M, K>>>,
    hooks: Arc<dyn CommandHooks<M, K>>,
}

impl<M, K> CommandRegistry<M, K>
where
    M: CommandMessage + 'static,
    K: Send + Sync + 'static,
{
    /// Creates an empty registry. Nothing is read until `load_all_commands`.
    ///
    /// `commands_root` is used for directory listings while `module_root` is
    /// the prefix of the paths the loader resolves. They are often equal.
    pub fn new<F>(
        is_admin: F,
        commands_root: impl Into<PathBuf>,
        module_root: impl Into<String>,
        file_system: Arc<dyn FileSystem>,
        loader: Arc<dyn ModuleLoader<dyn CommandHandler<M, K>>>,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            client_commands: CommandTable::<M, K>::default(),
            admin_commands: CommandTable::<M, K>::default(),
            scheduled_commands: CommandTable::<M, K>::default(),
            is_admin: Box::new(is_admin),
            commands_root: commands_root.into(),
            module_root: module_root.into(),
            scanner: ModuleScanner::new(file_system, DEFAULT_MODULE_EXTENSION),
            loader,
            hooks: Arc::new(NoopHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn CommandHooks<M, K>>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Changes which file extension marks a handler file.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.scanner = ModuleScanner::new(self.scanner.file_system(), extension);
        self
    }

    pub fn client_commands(&self) -> &CommandTable<M, K> {
        &self.client_commands
    }

    pub fn admin_commands(&self) -> &CommandTable<M, K> {
        &self.admin_commands
    }

    pub fn scheduled_commands(&self) -> &CommandTable<M, K> {
        &self.scheduled_commands
    }

    /// Loads the `client`, `admin` and `scheduled` directories.
    ///
    /// `client` is required. A missing `admin` directory only produces a
    /// warning and `scheduled` is skipped when absent. The tables are swapped
    /// in only once every category loaded, so a failed pass leaves them as
    /// they were.
    pub fn load_all_commands(&mut self) -> Result<LoadSummary, LoadError> {
        let mut summary = LoadSummary::default();

        let client = self
            .load_category(CommandCategory::Client)
            .inspect_err(|err| {
                tracing::error!(error = %err, "Expected at least one client command");
            })?;

        let admin_dir = self.category_dir(CommandCategory::Admin);
        let admin = match self.load_category(CommandCategory::Admin) {
            Ok(table) => table,
            Err(err) if err.is_missing_directory(&admin_dir) => {
                tracing::warn!(path = %admin_dir.display(), "No admin commands found");
                summary.warnings.push(LoadWarning::MissingAdminDirectory);
                CommandTable::<M, K>::default()
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load admin commands");
                return Err(err);
            }
        };

        let scheduled_dir = self.category_dir(CommandCategory::Scheduled);
        let scheduled = if self.scanner.exists(&scheduled_dir) {
            self.load_category(CommandCategory::Scheduled)?
        } else {
            CommandTable::<M, K>::default()
        };

        summary.client = client.len();
        summary.admin = admin.len();
        summary.scheduled = scheduled.len();

        self.client_commands = client;
        self.admin_commands = admin;
        self.scheduled_commands = scheduled;

        tracing::info!(
            client = summary.client,
            admin = summary.admin,
            scheduled = summary.scheduled,
            "Loaded commands"
        );

        Ok(summary)
    }

    /// Looks a statement up for the given author.
    ///
    /// Admins see the admin table first and fall back to the client table.
    /// Everyone else only sees the client table.
    pub fn get_command(&self, statement: &str, author_id: &str) -> CommandResponse<M, K> {
        if (self.is_admin)(author_id) {
            if let Some(command) = self.admin_commands.get(statement) {
                return CommandResponse {
                    command: Some(Arc::clone(command)),
                    is_admin_command: true,
                };
            }
        }

        self.get_client_command(statement)
    }

    /// Runs the handler matching `event.statement`.
    ///
    /// Handler errors are returned as-is and skip the post-execution hook.
    pub async fn execute(&self, event: &mut MessageEventCore<M, K>) -> Result<(), Error> {
        let author_id = event.message.author_id();
        let response = self.get_command(&event.statement, &author_id);

        let Some(command) = response.command else {
            tracing::debug!(statement = %event.statement, author_id = %author_id, "Command not found");
            return self.hooks.command_not_found(event).await;
        };

        command.run(event).await?;
        self.hooks
            .post_command_execution(event, response.is_admin_command)
            .await
    }

    /// Announces in `channel` and runs every scheduled command in order.
    ///
    /// All handlers share one event whose message is the announcement. The
    /// first failure stops the batch.
    pub async fn run_scheduled_commands<C>(&self, channel: &C) -> Result<(), Error>
    where
        C: AnnouncementChannel<M> + ?Sized,
    {
        if self.scheduled_commands.is_empty() {
            return Ok(());
        }

        let message = channel.send_text(SCHEDULED_ANNOUNCEMENT).await?;
        tracing::info!("{}", SCHEDULED_ANNOUNCEMENT);

        let mut event = MessageEventCore::new(SCHEDULED_STATEMENT, message, Vec::new(), "");
        for (name, command) in &self.scheduled_commands {
            tracing::debug!(command = %name, "Running scheduled command");
            command.run(&mut event).await?;
        }

        Ok(())
    }

    fn get_client_command(&self, statement: &str) -> CommandResponse<M, K> {
        CommandResponse {
            command: self.client_commands.get(statement).cloned(),
            is_admin_command: false,
        }
    }

    fn category_dir(&self, category: CommandCategory) -> PathBuf {
        self.commands_root.join(category.dir_name())
    }

    /// Builds one table from `<root>/<category>`.
    ///
    /// Files directly inside the category become commands. A subdirectory is
    /// a package: it may not contain further directories and its handler is
    /// always `<dir>/<dir>.<ext>`.
    fn load_category(&self, category: CommandCategory) -> Result<CommandTable<M, K>, LoadError> {
        let dir = self.category_dir(category);
        let category_name = category.dir_name();
        let listing = self.scanner.parse_directory(&dir)?;
        let mut table = CommandTable::<M, K>::default();

        for file_name in &listing.module_files {
            let module_path = join_module_path(&[&self.module_root, category_name, file_name]);
            self.add_command(&mut table, category, file_name, &module_path)?;
        }

        for sub_dir in &listing.sub_dirs {
            let sub_dir_path = dir.join(sub_dir);
            let sub_listing = self.scanner.parse_directory(&sub_dir_path)?;
            if !sub_listing.sub_dirs.is_empty() {
                return Err(LoadError::UnsupportedStructure(sub_dir_path));
            }
            if sub_listing.module_files.is_empty() {
                tracing::debug!(path = %sub_dir_path.display(), "Skipping empty command package");
                continue;
            }

            let entry = self.scanner.entry_file_name(sub_dir);
            if !sub_listing.module_files.contains(&entry) {
                return Err(LoadError::MissingEntryFile {
                    dir: sub_dir_path,
                    entry,
                });
            }

            let module_path =
                join_module_path(&[&self.module_root, category_name, sub_dir, &entry]);
            self.add_command(&mut table, category, &entry, &module_path)?;
        }

        Ok(table)
    }

    fn add_command(
        &self,
        table: &mut CommandTable<M, K>,
        category: CommandCategory,
        file_name: &str,
        module_path: &str,
    ) -> Result<(), LoadError> {
        let handler = self.loader.load(module_path)?;
        let name = handler_name(file_name).to_string();

        tracing::debug!(%category, command = %name, module = module_path, "Registered command");
        if table.insert(name.clone(), handler).is_some() {
            tracing::warn!(%category, command = %name, "Duplicate command name, keeping the last one");
        }

        Ok(())
    }
}
