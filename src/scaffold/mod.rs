//! Scaffolding engine: naming, planning, writing, and reversing modules.

pub mod artifact;
pub mod generator;
pub mod migrate;
pub mod naming;
pub mod report;
pub mod rollback;
pub mod routes;

pub use artifact::{ArtifactKind, ViewKind};
pub use generator::{GeneratedFile, GeneratedModule, ModuleGenerator};
pub use migrate::{MigrateStatus, MigrationRunner, ProcessMigrationRunner};
pub use naming::EntityName;
pub use report::{Entry, Level, Report};
pub use rollback::ModuleRollback;
pub use routes::{DiskRoutesFile, MemoryRoutesFile, RemoveOutcome, RoutePattern, RoutesFile};
