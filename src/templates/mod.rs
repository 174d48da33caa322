//! Artifact templates and the registry that renders them.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::ScaffoldError;
use crate::scaffold::artifact::ArtifactKind;
use crate::scaffold::naming::EntityName;

pub mod files;

pub use files::*;

/// Renders artifact templates from entity name forms.
///
/// Templates are registered once at construction; rendering is a pure
/// function of the name forms (plus the view stem for views), so planning the
/// same entity twice yields identical content.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Build a registry with every artifact template registered.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut handlebars = Handlebars::new();
        // Generating code, not HTML: escaping would mangle the output.
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            ("model", MODEL_TEMPLATE),
            ("controller", CONTROLLER_TEMPLATE),
            ("policy", POLICY_TEMPLATE),
            ("factory", FACTORY_TEMPLATE),
            ("seeder", SEEDER_TEMPLATE),
            ("migration", MIGRATION_TEMPLATE),
            ("view", VIEW_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| ScaffoldError::Template(format!("{name}: {e}")))?;
        }

        Ok(Self { handlebars })
    }

    /// Render the template for one artifact kind.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if rendering fails.
    pub fn render(&self, kind: ArtifactKind, name: &EntityName) -> Result<String, ScaffoldError> {
        let mut context = json!({
            "studly": name.studly(),
            "snake": name.snake(),
            "snake_plural": name.snake_plural(),
            "lower_plural": name.lower_plural(),
        });

        if let ArtifactKind::View(view) = kind {
            context["view"] = json!(view.file_stem());
        }

        self.handlebars
            .render(kind.template_name(), &context)
            .map_err(|e| ScaffoldError::Template(format!("{}: {e}", kind.template_name())))
    }
}
