//! modgen CLI entry point.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};

use modgen::commands::{GenerateCommand, RollbackCommand};

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Modular CRUD scaffolding for module-per-entity projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a modular CRUD structure for an entity
    Generate {
        /// Entity name; "blog post", "BlogPost", and "blog_post" are equivalent
        name: String,
    },
    /// Roll back a previously generated modular CRUD structure
    Rollback {
        /// Entity name used at generation time
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { name } => {
            let cmd = GenerateCommand::new(name);
            cmd.execute()?;
        }
        Commands::Rollback { name } => {
            let cmd = RollbackCommand::new(name);
            cmd.execute()?;
        }
    }

    Ok(())
}
