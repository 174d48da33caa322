//! Rollback command: remove a previously scaffolded module.

use anyhow::{Context, Result};
use console::style;

use crate::config::ModgenConfig;
use crate::scaffold::migrate::ProcessMigrationRunner;
use crate::scaffold::report::Report;
use crate::scaffold::rollback::ModuleRollback;
use crate::scaffold::routes::DiskRoutesFile;

use super::print_report;

/// Removes the module, migrations, views, and route registration for an
/// entity, reversing the migration through the host's runner first.
pub struct RollbackCommand {
    name: String,
}

impl RollbackCommand {
    /// Command for the given raw entity name.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Execute the command against the current directory.
    ///
    /// Artifacts that are already gone produce warnings, not errors, so
    /// rolling back twice is safe.
    ///
    /// # Errors
    ///
    /// Returns an error when the entity name is unusable, configuration
    /// fails to load, or a delete fails partway through.
    pub fn execute(&self) -> Result<()> {
        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let config = ModgenConfig::load(&project_root)?;

        let rollback = ModuleRollback::new(&self.name, project_root.clone(), config.clone())
            .context("Failed to create module rollback")?;

        println!(
            "\n{} {} {}",
            style("Rolling back modular CRUD for").cyan().bold(),
            style(rollback.name().studly()).green().bold(),
            style("...").cyan().bold()
        );

        let runner = ProcessMigrationRunner::new(&config.migrate.command);
        let mut routes = DiskRoutesFile::new(project_root.join(&config.paths.routes_file));
        let mut report = Report::new();

        let outcome = rollback.execute(&runner, &mut routes, &mut report);

        print_report(&report);

        outcome.context("Failed to roll back module artifacts")?;

        println!(
            "\n{} Modular CRUD for {} rolled back successfully!",
            style("✨").green().bold(),
            style(rollback.name().studly()).green().bold()
        );

        Ok(())
    }
}
