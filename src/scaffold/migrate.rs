//! External migration runner invocation.
//!
//! Reversing an applied migration is the host project's job. This module only
//! shells out to its migration binary and reports what happened; the outcome
//! never aborts a rollback. Reversal is inherently best-effort: the runner
//! can only reliably reverse the most recently applied batch.

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Result of asking the host to reverse one migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateStatus {
    /// The runner exited successfully.
    Reversed,
    /// The runner ran but exited nonzero, with its exit code when available.
    Failed(Option<i32>),
    /// The runner could not be started at all.
    Unavailable(String),
}

impl fmt::Display for MigrateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reversed => write!(f, "reversed"),
            Self::Failed(Some(code)) => write!(f, "runner exited with code {code}"),
            Self::Failed(None) => write!(f, "runner terminated by signal"),
            Self::Unavailable(reason) => write!(f, "runner unavailable: {reason}"),
        }
    }
}

/// Reverses a single migration file.
pub trait MigrationRunner {
    /// Ask the host to reverse the migration at `migration`.
    fn reverse(&self, migration: &Path) -> MigrateStatus;
}

/// Runs the host project's migration binary as a child process.
///
/// Invocation is `<command> rollback --path <file> --force`, blocking until
/// the child exits. Stdout and stderr are inherited so the runner's own
/// output stays visible.
#[derive(Debug, Clone)]
pub struct ProcessMigrationRunner {
    command: String,
}

impl ProcessMigrationRunner {
    /// Runner that invokes `command`.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl MigrationRunner for ProcessMigrationRunner {
    fn reverse(&self, migration: &Path) -> MigrateStatus {
        let status = Command::new(&self.command)
            .arg("rollback")
            .arg("--path")
            .arg(migration)
            .arg("--force")
            .status();

        match status {
            Ok(status) if status.success() => MigrateStatus::Reversed,
            Ok(status) => MigrateStatus::Failed(status.code()),
            Err(e) => MigrateStatus::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runner_binary_is_unavailable_not_a_panic() {
        let runner = ProcessMigrationRunner::new("modgen-test-no-such-binary");
        let status = runner.reverse(Path::new("database/migrations/x.sql"));
        assert!(matches!(status, MigrateStatus::Unavailable(_)));
    }

    #[test]
    fn status_display_is_operator_readable() {
        assert_eq!(MigrateStatus::Reversed.to_string(), "reversed");
        assert_eq!(
            MigrateStatus::Failed(Some(1)).to_string(),
            "runner exited with code 1"
        );
        assert_eq!(
            MigrateStatus::Failed(None).to_string(),
            "runner terminated by signal"
        );
        assert!(MigrateStatus::Unavailable("no such file".into())
            .to_string()
            .contains("no such file"));
    }
}
