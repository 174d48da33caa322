//! Module scaffolding: plan the artifact set, then write it.
//!
//! Planning and writing are split so tests (and dry inspection) can look at
//! the full artifact set without touching a filesystem. `generate` builds the
//! plan in memory; `apply` writes it in scaffold order and registers the
//! route block last.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::ModgenConfig;
use crate::error::ScaffoldError;
use crate::scaffold::artifact::{migration_file_name, ArtifactKind, ViewKind, MODULE_SUBDIRS};
use crate::scaffold::naming::EntityName;
use crate::scaffold::report::Report;
use crate::scaffold::routes::{RoutePattern, RoutesFile};
use crate::templates::TemplateRegistry;

/// One planned output file: where it goes and what goes in it.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Rendered content.
    pub content: String,
    /// Short description used in report lines.
    pub description: String,
}

/// The planned artifact set for one entity.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// Module subdirectories, created before any file is written.
    pub directories: Vec<PathBuf>,
    /// Module sources plus the migration, in write order.
    pub files: Vec<GeneratedFile>,
    /// Views directory for this entity.
    pub views_dir: PathBuf,
    /// The four placeholder views.
    pub views: Vec<GeneratedFile>,
    /// Route block appended last.
    pub route: RoutePattern,
}

impl GeneratedModule {
    /// Every planned file, module sources and migration first, views last.
    pub fn all_files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().chain(self.views.iter())
    }

    /// Total number of planned files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len() + self.views.len()
    }
}

/// Plans and writes the full scaffold for one entity.
pub struct ModuleGenerator {
    name: EntityName,
    project_root: PathBuf,
    config: ModgenConfig,
    templates: TemplateRegistry,
}

impl ModuleGenerator {
    /// Create a generator for `raw_name` rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidArgument`] for an unusable name and
    /// [`ScaffoldError::Template`] if a built-in template fails to compile.
    pub fn new(
        raw_name: &str,
        project_root: impl Into<PathBuf>,
        config: ModgenConfig,
    ) -> Result<Self, ScaffoldError> {
        Ok(Self {
            name: EntityName::parse(raw_name)?,
            project_root: project_root.into(),
            config,
            templates: TemplateRegistry::new()?,
        })
    }

    /// The normalized entity name.
    #[must_use]
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// Plan every artifact without touching the filesystem.
    ///
    /// The migration filename is stamped with the current UTC time, so
    /// successive runs sort after each other.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if any artifact fails to render.
    pub fn generate(&self) -> Result<GeneratedModule, ScaffoldError> {
        self.generate_at(Utc::now())
    }

    /// Plan with an explicit migration timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if any artifact fails to render.
    pub fn generate_at(&self, at: DateTime<Utc>) -> Result<GeneratedModule, ScaffoldError> {
        let paths = &self.config.paths;
        let module_dir = paths.modules_dir.join(self.name.studly());

        let directories = MODULE_SUBDIRS
            .iter()
            .map(|subdir| module_dir.join(subdir))
            .collect();

        let mut files = Vec::with_capacity(ArtifactKind::MODULE_SOURCES.len() + 1);
        for kind in ArtifactKind::MODULE_SOURCES {
            if let Some((subdir, file_name)) = kind.module_location(&self.name) {
                files.push(GeneratedFile {
                    path: module_dir.join(subdir).join(file_name),
                    content: self.templates.render(kind, &self.name)?,
                    description: kind.describe(&self.name),
                });
            }
        }

        files.push(GeneratedFile {
            path: paths
                .migrations_dir
                .join(migration_file_name(&self.name, at)),
            content: self.templates.render(ArtifactKind::Migration, &self.name)?,
            description: ArtifactKind::Migration.describe(&self.name),
        });

        let views_dir = paths.views_dir.join(self.name.lower_plural());
        let mut views = Vec::with_capacity(ViewKind::ALL.len());
        for view in ViewKind::ALL {
            views.push(GeneratedFile {
                path: views_dir.join(format!("{}.html", view.file_stem())),
                content: self
                    .templates
                    .render(ArtifactKind::View(view), &self.name)?,
                description: ArtifactKind::View(view).describe(&self.name),
            });
        }

        Ok(GeneratedModule {
            directories,
            files,
            views_dir,
            views,
            route: RoutePattern::for_entity(&self.name),
        })
    }

    /// Write a planned module to disk and register its route.
    ///
    /// Steps run in scaffold order: module directories, module sources, the
    /// migration, the views directory and views, then the route block.
    /// Existing files are overwritten without prompting. The first filesystem
    /// failure aborts; files already written stay in place, and the report
    /// shows how far the run got.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] from the first create or write
    /// that fails, including failures from the routes handle.
    pub fn apply(
        &self,
        module: &GeneratedModule,
        routes: &mut dyn RoutesFile,
        report: &mut Report,
    ) -> Result<(), ScaffoldError> {
        for dir in &module.directories {
            let dir = self.project_root.join(dir);
            fs::create_dir_all(&dir).map_err(|e| ScaffoldError::fs("create directory", &dir, e))?;
        }

        for file in &module.files {
            self.write_file(file, report)?;
        }

        let views_dir = self.project_root.join(&module.views_dir);
        fs::create_dir_all(&views_dir)
            .map_err(|e| ScaffoldError::fs("create directory", &views_dir, e))?;
        for view in &module.views {
            self.write_file(view, report)?;
        }

        routes.append_block(&module.route)?;
        report.info(format!(
            "Registered resource routes for {} in {}",
            self.name.studly(),
            self.config.paths.routes_file.display(),
        ));

        Ok(())
    }

    fn write_file(&self, file: &GeneratedFile, report: &mut Report) -> Result<(), ScaffoldError> {
        let path = self.project_root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
        }
        fs::write(&path, &file.content).map_err(|e| ScaffoldError::fs("write", &path, e))?;
        report.info(format!(
            "Created {} ({})",
            file.path.display(),
            file.description
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::config::ScaffoldPaths;
    use crate::scaffold::routes::MemoryRoutesFile;

    use super::*;

    fn generator_for(name: &str) -> ModuleGenerator {
        ModuleGenerator::new(name, "/tmp/project", ModgenConfig::default()).unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn plan_covers_the_full_module_layout() {
        let module = generator_for("blog post").generate_at(fixed_time()).unwrap();

        let dirs: Vec<String> = module
            .directories
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        assert_eq!(
            dirs,
            vec![
                "app/Modules/BlogPost/Controllers",
                "app/Modules/BlogPost/Models",
                "app/Modules/BlogPost/Policies",
                "app/Modules/BlogPost/Factories",
                "app/Modules/BlogPost/Seeders",
            ]
        );

        let files: Vec<String> = module
            .all_files()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(
            files,
            vec![
                "app/Modules/BlogPost/Models/BlogPost.rs",
                "app/Modules/BlogPost/Controllers/BlogPostController.rs",
                "app/Modules/BlogPost/Policies/BlogPostPolicy.rs",
                "app/Modules/BlogPost/Factories/BlogPostFactory.rs",
                "app/Modules/BlogPost/Seeders/BlogPostSeeder.rs",
                "database/migrations/2025_01_15_103000_create_blog_posts_table.sql",
                "resources/views/blogposts/index.html",
                "resources/views/blogposts/create.html",
                "resources/views/blogposts/edit.html",
                "resources/views/blogposts/show.html",
            ]
        );
        assert_eq!(module.file_count(), 10);
        assert_eq!(
            module.views_dir.display().to_string(),
            "resources/views/blogposts"
        );
    }

    #[test]
    fn plan_respects_configured_paths() {
        let config = ModgenConfig {
            paths: ScaffoldPaths {
                modules_dir: PathBuf::from("src/modules"),
                migrations_dir: PathBuf::from("db/migrate"),
                ..ScaffoldPaths::default()
            },
            ..ModgenConfig::default()
        };

        let generator = ModuleGenerator::new("post", "/tmp/project", config).unwrap();
        let module = generator.generate_at(fixed_time()).unwrap();

        assert!(module.files[0]
            .path
            .starts_with("src/modules/Post/Models"));
        assert!(module.files[5].path.starts_with("db/migrate"));
    }

    #[test]
    fn planning_twice_yields_identical_content() {
        let generator = generator_for("order item");
        let first = generator.generate_at(fixed_time()).unwrap();
        let second = generator.generate_at(fixed_time()).unwrap();

        let contents = |module: &GeneratedModule| -> Vec<String> {
            module.all_files().map(|f| f.content.clone()).collect()
        };
        assert_eq!(contents(&first), contents(&second));
        assert_eq!(first.route, second.route);
    }

    #[test]
    fn apply_writes_every_file_and_appends_the_route() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            ModuleGenerator::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let module = generator.generate_at(fixed_time()).unwrap();

        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();
        generator.apply(&module, &mut routes, &mut report).unwrap();

        for file in module.all_files() {
            let on_disk = dir.path().join(&file.path);
            assert!(on_disk.is_file(), "missing {}", file.path.display());
            assert_eq!(fs::read_to_string(on_disk).unwrap(), file.content);
        }
        assert_eq!(routes.content(), module.route.block());

        // One line per file plus the route registration.
        assert_eq!(report.entries().len(), module.file_count() + 1);
        assert!(!report.has_warnings());
    }

    #[test]
    fn apply_overwrites_existing_files_silently() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            ModuleGenerator::new("post", dir.path(), ModgenConfig::default()).unwrap();
        let module = generator.generate_at(fixed_time()).unwrap();

        let model_path = dir.path().join(&module.files[0].path);
        fs::create_dir_all(model_path.parent().unwrap()).unwrap();
        fs::write(&model_path, "// hand-edited\n").unwrap();

        let mut routes = MemoryRoutesFile::new();
        let mut report = Report::new();
        generator.apply(&module, &mut routes, &mut report).unwrap();

        assert_eq!(
            fs::read_to_string(&model_path).unwrap(),
            module.files[0].content
        );
        assert!(!report.has_warnings());
    }
}
