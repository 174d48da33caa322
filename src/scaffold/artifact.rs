//! Artifact kinds and their output locations.

use chrono::{DateTime, Utc};

use crate::scaffold::naming::EntityName;

/// Subdirectories created inside a module directory, in creation order.
pub const MODULE_SUBDIRS: [&str; 5] = ["Controllers", "Models", "Policies", "Factories", "Seeders"];

/// The four placeholder views scaffolded per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Listing page.
    Index,
    /// Creation form.
    Create,
    /// Edit form.
    Edit,
    /// Detail page.
    Show,
}

impl ViewKind {
    /// All views, in generation order.
    pub const ALL: [Self; 4] = [Self::Index, Self::Create, Self::Edit, Self::Show];

    /// File stem of the view inside the entity's views directory.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Show => "show",
        }
    }
}

/// The closed set of artifacts a module scaffold is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Data model struct.
    Model,
    /// Resource controller with the seven CRUD actions.
    Controller,
    /// Authorization policy skeleton.
    Policy,
    /// Test data factory skeleton.
    Factory,
    /// Database seeder skeleton.
    Seeder,
    /// Timestamped SQL migration.
    Migration,
    /// Placeholder view.
    View(ViewKind),
}

impl ArtifactKind {
    /// Module source kinds, in generation order.
    pub const MODULE_SOURCES: [Self; 5] = [
        Self::Model,
        Self::Controller,
        Self::Policy,
        Self::Factory,
        Self::Seeder,
    ];

    /// Name the kind's template is registered under.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Policy => "policy",
            Self::Factory => "factory",
            Self::Seeder => "seeder",
            Self::Migration => "migration",
            Self::View(_) => "view",
        }
    }

    /// Subdirectory and file name under the module directory.
    ///
    /// `None` for kinds that live outside the module tree (migration, views).
    #[must_use]
    pub fn module_location(self, name: &EntityName) -> Option<(&'static str, String)> {
        let studly = name.studly();
        match self {
            Self::Model => Some(("Models", format!("{studly}.rs"))),
            Self::Controller => Some(("Controllers", format!("{studly}Controller.rs"))),
            Self::Policy => Some(("Policies", format!("{studly}Policy.rs"))),
            Self::Factory => Some(("Factories", format!("{studly}Factory.rs"))),
            Self::Seeder => Some(("Seeders", format!("{studly}Seeder.rs"))),
            Self::Migration | Self::View(_) => None,
        }
    }

    /// Short description used in per-file report lines.
    #[must_use]
    pub fn describe(self, name: &EntityName) -> String {
        match self {
            Self::Model => format!("model for {}", name.studly()),
            Self::Controller => format!("resource controller for {}", name.studly()),
            Self::Policy => format!("authorization policy for {}", name.studly()),
            Self::Factory => format!("factory for {}", name.studly()),
            Self::Seeder => format!("seeder for {}", name.studly()),
            Self::Migration => format!("migration for the {} table", name.snake_plural()),
            Self::View(view) => format!("{} view for {}", view.file_stem(), name.lower_plural()),
        }
    }
}

/// Migration filename for an entity at a given instant.
///
/// The `YYYY_MM_DD_HHMMSS` prefix keeps migrations lexically sorted in
/// creation order; the `create_<table>_table` suffix is what rollback matches
/// on (via the snake singular it contains).
#[must_use]
pub fn migration_file_name(name: &EntityName, at: DateTime<Utc>) -> String {
    format!(
        "{}_create_{}_table.sql",
        at.format("%Y_%m_%d_%H%M%S"),
        name.snake_plural()
    )
}
