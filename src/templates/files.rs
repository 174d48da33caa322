//! Static templates for every generated artifact.
//!
//! Placeholders are handlebars expressions filled from the entity name forms:
//! `{{studly}}`, `{{snake}}`, `{{snake_plural}}`, `{{lower_plural}}`, and
//! `{{view}}` for the view template. Generated module sources are skeletons
//! for the host project to flesh out; nothing here is compiled by this crate.

/// Model: one struct per table, with the fixed columns the migration creates.
pub const MODEL_TEMPLATE: &str = r#"//! {{studly}} model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row in the `{{snake_plural}}` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct {{studly}} {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl {{studly}} {
    /// Table backing this model.
    pub const TABLE: &'static str = "{{snake_plural}}";
}
"#;

/// Controller: the seven resource actions, wired to the entity's views.
pub const CONTROLLER_TEMPLATE: &str = r#"//! Resource controller for {{studly}}.

use app::prelude::*;

use app::Modules::{{studly}}::Models::{{studly}};

pub struct {{studly}}Controller;

impl {{studly}}Controller {
    /// GET /{{snake_plural}}
    pub fn index(ctx: Context) -> Response {
        let items = {{studly}}::all(&ctx);
        ctx.view("{{lower_plural}}.index").with("items", items)
    }

    /// GET /{{snake_plural}}/create
    pub fn create(ctx: Context) -> Response {
        ctx.view("{{lower_plural}}.create")
    }

    /// POST /{{snake_plural}}
    pub fn store(ctx: Context, request: Request) -> Response {
        // Store logic here
        ctx.redirect("{{lower_plural}}.index")
    }

    /// GET /{{snake_plural}}/{id}
    pub fn show(ctx: Context, item: {{studly}}) -> Response {
        ctx.view("{{lower_plural}}.show").with("item", item)
    }

    /// GET /{{snake_plural}}/{id}/edit
    pub fn edit(ctx: Context, item: {{studly}}) -> Response {
        ctx.view("{{lower_plural}}.edit").with("item", item)
    }

    /// PUT /{{snake_plural}}/{id}
    pub fn update(ctx: Context, request: Request, item: {{studly}}) -> Response {
        // Update logic here
        ctx.redirect("{{lower_plural}}.index")
    }

    /// DELETE /{{snake_plural}}/{id}
    pub fn destroy(ctx: Context, item: {{studly}}) -> Response {
        item.delete(&ctx);
        ctx.redirect("{{lower_plural}}.index")
    }
}
"#;

/// Policy: empty skeleton for the host's authorization checks.
pub const POLICY_TEMPLATE: &str = r#"//! Authorization policy for {{studly}}.

use app::Modules::{{studly}}::Models::{{studly}};

pub struct {{studly}}Policy;

impl {{studly}}Policy {
    // Policy methods here
}
"#;

/// Factory: attribute defaults for test data.
pub const FACTORY_TEMPLATE: &str = r#"//! Test data factory for {{studly}}.

use app::Modules::{{studly}}::Models::{{studly}};

pub struct {{studly}}Factory;

impl {{studly}}Factory {
    /// Attribute defaults for a freshly built {{studly}}.
    pub fn definition() -> {{studly}} {
        {{studly}} {
            //
            ..Default::default()
        }
    }
}
"#;

/// Seeder: empty skeleton for populating the entity's table.
pub const SEEDER_TEMPLATE: &str = r#"//! Database seeder for {{studly}}.

use app::Database;

pub struct {{studly}}Seeder;

impl {{studly}}Seeder {
    /// Populate the `{{snake_plural}}` table.
    pub fn run(db: &Database) {
        //
    }
}
"#;

/// Migration: creates the table with id and timestamps, drops it on the way
/// down.
pub const MIGRATION_TEMPLATE: &str = r#"-- Create {{snake_plural}} table

-- migrate:up
CREATE TABLE {{snake_plural}} (
    id SERIAL PRIMARY KEY,
    created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP NOT NULL,
    updated_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP NOT NULL
);

-- migrate:down
DROP TABLE IF EXISTS {{snake_plural}};
"#;

/// View: a one-line placeholder naming the view and its entity.
pub const VIEW_TEMPLATE: &str = "<!-- {{view}} view for {{studly}} -->\n";
