//! Modular CRUD scaffolding for module-per-entity web projects.
//!
//! `modgen generate <name>` writes a module's boilerplate (model, resource
//! controller, policy, factory, seeder, a timestamped SQL migration, and
//! placeholder views) and registers a resource route block in the shared
//! routes file. `modgen rollback <name>` reverses all of it, asking the host
//! project's migration runner to reverse the migration before deleting its
//! file.
//!
//! Both operations derive every path and identifier from the same normalized
//! entity name, so whatever generate created, rollback can find.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod templates;

pub use config::{MigrateSettings, ModgenConfig, ScaffoldPaths};
pub use error::ScaffoldError;
pub use scaffold::{EntityName, ModuleGenerator, ModuleRollback, Report};
