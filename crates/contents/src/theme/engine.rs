//! Theme engine backed by Tera.

use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

/// Template name of the contents filter box.
pub const FILTER_BOX_TEMPLATE: &str = "contents/filter-box.html";

/// Templates compiled into the binary. A template directory can override
/// any of them by providing a file with the same relative name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    FILTER_BOX_TEMPLATE,
    include_str!("../../templates/contents/filter-box.html"),
)];

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with the built-in templates only.
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        Self::add_builtins(&mut tera)?;
        Ok(Self { tera })
    }

    /// Create a theme engine loading templates from the given directory on
    /// top of the built-in ones.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        Self::add_builtins(&mut tera)?;

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), dir = %template_dir.display(), "loaded templates");

        Ok(Self { tera })
    }

    fn add_builtins(tera: &mut Tera) -> Result<()> {
        let missing: Vec<_> = BUILTIN_TEMPLATES
            .iter()
            .filter(|(name, _)| tera.get_template(name).is_err())
            .copied()
            .collect();

        tera.add_raw_templates(missing)
            .context("failed to compile built-in templates")
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template(name).is_ok()
    }

    /// Render a template with the given context.
    pub fn render(&self, template: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("failed to render template {template}"))
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_filter_box() {
        let engine = ThemeEngine::builtin().unwrap();
        assert!(engine.has_template(FILTER_BOX_TEMPLATE));
        assert!(!engine.has_template("contents/missing.html"));
    }

    #[test]
    fn directory_overrides_builtin() {
        let dir = std::env::temp_dir().join(format!("theme-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(dir.join("contents")).unwrap();
        std::fs::write(dir.join("contents/filter-box.html"), "custom {{ action }}").unwrap();

        let engine = ThemeEngine::new(&dir).unwrap();
        let mut context = tera::Context::new();
        context.insert("action", "/admin/contents");
        // .html templates are autoescaped.
        assert_eq!(
            engine.render(FILTER_BOX_TEMPLATE, &context).unwrap(),
            "custom &#x2F;admin&#x2F;contents"
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn render_missing_template_fails() {
        let engine = ThemeEngine::builtin().unwrap();
        assert!(engine.render("nope.html", &tera::Context::new()).is_err());
    }
}
