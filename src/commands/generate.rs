//! Generate command: scaffold a full module for one entity.

use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ModgenConfig;
use crate::scaffold::generator::ModuleGenerator;
use crate::scaffold::report::Report;
use crate::scaffold::routes::DiskRoutesFile;

use super::print_report;

/// Scaffolds the module, migration, views, and route registration for an
/// entity.
pub struct GenerateCommand {
    name: String,
}

impl GenerateCommand {
    /// Command for the given raw entity name.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Execute the command against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the entity name is unusable, configuration
    /// fails to load, or an artifact cannot be written.
    pub fn execute(&self) -> Result<()> {
        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let config = ModgenConfig::load(&project_root)?;

        let generator = ModuleGenerator::new(&self.name, project_root.clone(), config.clone())
            .context("Failed to create module generator")?;

        println!(
            "\n{} {} {}",
            style("Scaffolding modular CRUD for").cyan().bold(),
            style(generator.name().studly()).green().bold(),
            style("...").cyan().bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Writing module files...");

        let module = generator
            .generate()
            .context("Failed to plan module artifacts")?;

        let mut routes = DiskRoutesFile::new(project_root.join(&config.paths.routes_file));
        let mut report = Report::new();
        let outcome = generator.apply(&module, &mut routes, &mut report);

        spinner.finish_and_clear();

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            module.file_count()
        );
        print_report(&report);

        outcome.context("Failed to write module artifacts")?;

        println!(
            "\n{} Modular CRUD for {} generated successfully!",
            style("✨").green().bold(),
            style(generator.name().studly()).green().bold()
        );
        print_next_steps(&config);

        Ok(())
    }
}

fn print_next_steps(config: &ModgenConfig) {
    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Apply the migration: {}",
        style(format!("{} up", config.migrate.command)).yellow()
    );
    println!("  2. Fill in the model fields and migration columns");
    println!("  3. Implement the store and update actions in the controller");
}
