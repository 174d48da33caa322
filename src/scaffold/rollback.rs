//! Rollback: remove everything a generate created for an entity.
//!
//! Steps mirror generation. The module tree goes first, then matching
//! migrations are reversed and deleted, then the views directory, and the
//! route block last. Every absent artifact is a warning rather than an error,
//! which is what makes re-running a rollback (or rolling back a half-written
//! module) safe.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::ModgenConfig;
use crate::error::ScaffoldError;
use crate::scaffold::migrate::{MigrateStatus, MigrationRunner};
use crate::scaffold::naming::EntityName;
use crate::scaffold::report::Report;
use crate::scaffold::routes::{RemoveOutcome, RoutePattern, RoutesFile};

/// Reverses a previous generate for one entity.
pub struct ModuleRollback {
    name: EntityName,
    project_root: PathBuf,
    config: ModgenConfig,
}

impl ModuleRollback {
    /// Create a rollback for `raw_name` rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidArgument`] for an unusable name.
    pub fn new(
        raw_name: &str,
        project_root: impl Into<PathBuf>,
        config: ModgenConfig,
    ) -> Result<Self, ScaffoldError> {
        Ok(Self {
            name: EntityName::parse(raw_name)?,
            project_root: project_root.into(),
            config,
        })
    }

    /// The normalized entity name.
    #[must_use]
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// Execute the rollback, recording every outcome in `report`.
    ///
    /// The migrations directory is scanned once; the reversal and deletion
    /// passes work from the same list, so a file deleted by the first pass
    /// can never confuse the second.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] when a directory delete or the
    /// routes rewrite fails. Migration reversal failures and absent artifacts
    /// are reported, never returned.
    pub fn execute(
        &self,
        runner: &dyn MigrationRunner,
        routes: &mut dyn RoutesFile,
        report: &mut Report,
    ) -> Result<(), ScaffoldError> {
        self.remove_module_tree(report)?;

        let migrations = self.matching_migrations()?;
        self.reverse_migrations(&migrations, runner, report);
        self.delete_migrations(&migrations, report);

        self.remove_views_dir(report)?;
        self.remove_route_block(routes, report)?;

        Ok(())
    }

    fn remove_module_tree(&self, report: &mut Report) -> Result<(), ScaffoldError> {
        let rel = self.config.paths.modules_dir.join(self.name.studly());
        let dir = self.project_root.join(&rel);

        if dir.is_dir() {
            let file_count = WalkDir::new(&dir)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .count();
            fs::remove_dir_all(&dir)
                .map_err(|e| ScaffoldError::fs("delete directory", &dir, e))?;
            report.info(format!(
                "Deleted module directory {} ({file_count} files)",
                rel.display()
            ));
        } else {
            report.warn(format!("Module directory not found: {}", rel.display()));
        }
        Ok(())
    }

    /// Migration files whose name contains the entity's snake singular,
    /// as paths relative to the project root, in lexical order.
    fn matching_migrations(&self) -> Result<Vec<PathBuf>, ScaffoldError> {
        let rel = &self.config.paths.migrations_dir;
        let dir = self.project_root.join(rel);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        let entries =
            fs::read_dir(&dir).map_err(|e| ScaffoldError::fs("read directory", &dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ScaffoldError::fs("read directory", &dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.contains(self.name.snake()) {
                matches.push(rel.join(file_name));
            }
        }
        matches.sort();
        Ok(matches)
    }

    /// Ask the host to reverse each matching migration before its file goes
    /// away. Best-effort: only the most recently applied batch can actually
    /// be reversed, so failures are warnings.
    fn reverse_migrations(
        &self,
        migrations: &[PathBuf],
        runner: &dyn MigrationRunner,
        report: &mut Report,
    ) {
        for rel in migrations {
            let path = self.project_root.join(rel);
            match runner.reverse(&path) {
                MigrateStatus::Reversed => {
                    report.info(format!("Reversed migration {}", rel.display()));
                }
                status => {
                    report.warn(format!(
                        "Could not reverse migration {} ({status})",
                        rel.display()
                    ));
                }
            }
        }
    }

    fn delete_migrations(&self, migrations: &[PathBuf], report: &mut Report) {
        if migrations.is_empty() {
            report.warn(format!(
                "No migration files found for {}",
                self.name.studly()
            ));
            return;
        }

        for rel in migrations {
            let path = self.project_root.join(rel);
            match fs::remove_file(&path) {
                Ok(()) => report.info(format!("Deleted migration {}", rel.display())),
                Err(e) => report.warn(format!(
                    "Could not delete migration {} ({e})",
                    rel.display()
                )),
            }
        }
    }

    fn remove_views_dir(&self, report: &mut Report) -> Result<(), ScaffoldError> {
        let rel = self.config.paths.views_dir.join(self.name.lower_plural());
        let dir = self.project_root.join(&rel);

        if dir.is_dir() {
            fs::remove_dir_all(&dir)
                .map_err(|e| ScaffoldError::fs("delete directory", &dir, e))?;
            report.info(format!("Deleted views directory {}", rel.display()));
        } else {
            report.warn(format!("Views directory not found: {}", rel.display()));
        }
        Ok(())
    }

    fn remove_route_block(
        &self,
        routes: &mut dyn RoutesFile,
        report: &mut Report,
    ) -> Result<(), ScaffoldError> {
        let pattern = RoutePattern::for_entity(&self.name);
        let rel = &self.config.paths.routes_file;

        match routes.remove_block(&pattern)? {
            RemoveOutcome::Removed => report.info(format!(
                "Removed resource routes for {} from {}",
                self.name.studly(),
                rel.display()
            )),
            RemoveOutcome::BlockNotFound => report.warn(format!(
                "No route registration found for {} in {}",
                self.name.studly(),
                rel.display()
            )),
            RemoveOutcome::FileMissing => {
                report.warn(format!("Routes file not found: {}", rel.display()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;

    use crate::scaffold::routes::MemoryRoutesFile;

    use super::*;

    /// Runner stub that records every reversal request.
    struct RecordingRunner {
        status: MigrateStatus,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl RecordingRunner {
        fn new(status: MigrateStatus) -> Self {
            Self {
                status,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MigrationRunner for RecordingRunner {
        fn reverse(&self, migration: &Path) -> MigrateStatus {
            self.calls.borrow_mut().push(migration.to_path_buf());
            self.status.clone()
        }
    }

    fn warnings(report: &Report) -> Vec<String> {
        report
            .entries()
            .iter()
            .filter(|entry| entry.level == crate::scaffold::report::Level::Warn)
            .map(|entry| entry.message.clone())
            .collect()
    }

    #[test]
    fn rollback_on_an_empty_project_warns_for_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let rollback =
            ModuleRollback::new("ghost", dir.path(), ModgenConfig::default()).unwrap();

        let runner = RecordingRunner::new(MigrateStatus::Reversed);
        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();

        rollback
            .execute(&runner, &mut routes, &mut report)
            .unwrap();

        let warnings = warnings(&report);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("Module directory not found"));
        assert!(warnings[1].contains("No migration files found for Ghost"));
        assert!(warnings[2].contains("Views directory not found"));
        assert!(warnings[3].contains("No route registration found for Ghost"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn only_migrations_containing_the_snake_name_are_touched() {
        let dir = tempfile::tempdir().unwrap();
        let migrations = dir.path().join("database/migrations");
        fs::create_dir_all(&migrations).unwrap();
        fs::write(
            migrations.join("2025_01_15_103000_create_posts_table.sql"),
            "-- posts",
        )
        .unwrap();
        fs::write(
            migrations.join("2025_01_16_090000_create_comments_table.sql"),
            "-- comments",
        )
        .unwrap();

        let rollback = ModuleRollback::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let runner = RecordingRunner::new(MigrateStatus::Reversed);
        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();

        rollback
            .execute(&runner, &mut routes, &mut report)
            .unwrap();

        assert!(!migrations.join("2025_01_15_103000_create_posts_table.sql").exists());
        assert!(migrations.join("2025_01_16_090000_create_comments_table.sql").exists());

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("2025_01_15_103000_create_posts_table.sql"));
    }

    #[test]
    fn failed_reversal_still_deletes_the_migration_file() {
        let dir = tempfile::tempdir().unwrap();
        let migrations = dir.path().join("database/migrations");
        fs::create_dir_all(&migrations).unwrap();
        let migration = migrations.join("2025_01_15_103000_create_posts_table.sql");
        fs::write(&migration, "-- posts").unwrap();

        let rollback = ModuleRollback::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let runner = RecordingRunner::new(MigrateStatus::Failed(Some(1)));
        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();

        rollback
            .execute(&runner, &mut routes, &mut report)
            .unwrap();

        assert!(!migration.exists());
        assert!(warnings(&report)
            .iter()
            .any(|message| message.contains("Could not reverse migration")));
    }

    #[test]
    fn module_tree_removal_counts_files() {
        let dir = tempfile::tempdir().unwrap();
        let module = dir.path().join("app/Modules/Post");
        fs::create_dir_all(module.join("Models")).unwrap();
        fs::create_dir_all(module.join("Controllers")).unwrap();
        fs::write(module.join("Models/Post.rs"), "// model").unwrap();
        fs::write(module.join("Controllers/PostController.rs"), "// controller").unwrap();

        let rollback = ModuleRollback::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let runner = RecordingRunner::new(MigrateStatus::Reversed);
        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();

        rollback
            .execute(&runner, &mut routes, &mut report)
            .unwrap();

        assert!(!module.exists());
        assert!(report
            .entries()
            .iter()
            .any(|entry| entry.message.contains("app/Modules/Post (2 files)")));
    }

    #[test]
    fn route_block_is_stripped_and_neighbors_survive() {
        let dir = tempfile::tempdir().unwrap();
        let posts = RoutePattern::for_entity(&EntityName::parse("post").unwrap());
        let comments = RoutePattern::for_entity(&EntityName::parse("comment").unwrap());
        let mut routes = MemoryRoutesFile::with_content(format!(
            "// app routes\n{}{}",
            posts.block(),
            comments.block()
        ));

        let rollback = ModuleRollback::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let runner = RecordingRunner::new(MigrateStatus::Reversed);
        let mut report = Report::new();

        rollback
            .execute(&runner, &mut routes, &mut report)
            .unwrap();

        assert!(!routes.content().contains("Routes for Post"));
        assert!(routes.content().contains("Routes for Comment"));
    }
}
