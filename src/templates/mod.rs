//! Embedded page templates using the Tera template engine
//!
//! All templates are compiled into the binary; there is no theme directory
//! to resolve at runtime.

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with the embedded publications templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping stays on: card fields come straight from front-matter
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("pubpage/layout.html")),
            ("publications.html", include_str!("pubpage/publications.html")),
            (
                "partials/nav.html",
                include_str!("pubpage/partials/nav.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}
