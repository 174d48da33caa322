//! Tool configuration.
//!
//! Settings load from three layers with rising precedence: built-in defaults,
//! a `modgen.toml` at the project root, and `MODGEN_`-prefixed environment
//! variables. Nested keys use `__` in the environment, e.g.
//! `MODGEN_PATHS__ROUTES_FILE=routes/api.rs`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Where generated artifacts live, relative to the project root.
///
/// Absolute paths are honored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldPaths {
    /// Directory holding one subdirectory per generated module.
    pub modules_dir: PathBuf,
    /// Directory migrations are written to and scanned from.
    pub migrations_dir: PathBuf,
    /// Root of the view tree; each entity gets a subdirectory here.
    pub views_dir: PathBuf,
    /// Shared routes file that receives the registration block.
    pub routes_file: PathBuf,
}

impl Default for ScaffoldPaths {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from("app/Modules"),
            migrations_dir: PathBuf::from("database/migrations"),
            views_dir: PathBuf::from("resources/views"),
            routes_file: PathBuf::from("routes/web.rs"),
        }
    }
}

/// External migration runner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateSettings {
    /// Binary invoked as `<command> rollback --path <file> --force`.
    pub command: String,
}

impl Default for MigrateSettings {
    fn default() -> Self {
        Self {
            command: String::from("migrate"),
        }
    }
}

/// Complete tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModgenConfig {
    /// Output locations.
    #[serde(default)]
    pub paths: ScaffoldPaths,
    /// Migration runner.
    #[serde(default)]
    pub migrate: MigrateSettings,
}

impl ModgenConfig {
    /// Config file name looked up at the project root.
    pub const FILE_NAME: &'static str = "modgen.toml";

    /// Load configuration for the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error when `modgen.toml` exists but is unreadable or
    /// invalid, or when an environment override fails to deserialize.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let local = root.join(Self::FILE_NAME);
        if local.exists() {
            figment = figment.merge(Toml::file(&local));
        }

        figment = figment.merge(Env::prefixed("MODGEN_").split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }
}
