//! CLI command implementations.

use console::{style, Emoji};

use crate::scaffold::report::{Level, Report};

pub mod generate;
pub mod rollback;

pub use generate::GenerateCommand;
pub use rollback::RollbackCommand;

static SUCCESS: Emoji = Emoji("✓", "√");
static WARNING: Emoji = Emoji("⚠", "!");

/// Print a run report with one styled line per entry.
pub(crate) fn print_report(report: &Report) {
    for entry in report.entries() {
        match entry.level {
            Level::Info => println!("  {} {}", style(SUCCESS).green(), entry.message),
            Level::Warn => println!(
                "  {} {}",
                style(WARNING).yellow(),
                style(&entry.message).yellow()
            ),
        }
    }
}
