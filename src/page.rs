use anyhow::{Context, Result};
use quick_xml::escape::escape;
use tracing::info;

use crate::config::PageConfig;
use crate::document::Document;
use crate::markup::state_script;
use crate::registry::SlideshowRegistry;

/// `prevSlide`/`nextSlide`/`updateImage`, inlined when no host script is configured.
const HANDLERS: &str = include_str!("../assets/slides.js");

/// Renders a standalone HTML page with every configured widget initialized.
pub fn render_page(config: &PageConfig) -> Result<String> {
    let mut document = Document::new();
    for widget in &config.widgets {
        document.add_container(&widget.id);
    }

    let mut registry = SlideshowRegistry::new();
    for widget in &config.widgets {
        registry
            .initialize(&mut document, &widget.id, &widget.source, widget.start, widget.end)
            .with_context(|| format!("Failed to initialize widget `{}`", widget.id))?;
    }
    info!(widgets = registry.len(), "rendered page");

    let handlers = match &config.script {
        Some(src) => format!("  <script src=\"{}\"></script>\n", escape(src.as_str())),
        None => format!("  <script>\n{HANDLERS}  </script>\n"),
    };

    let mut states = String::new();
    for widget in &config.widgets {
        if let Some(state) = registry.state(&widget.id) {
            states.push_str(&state_script(&widget.id, state));
        }
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n{handlers}</head>\n<body>\n{body}<script>\n{states}</script>\n</body>\n</html>\n",
        title = escape(config.title.as_str()),
        handlers = handlers,
        body = document.to_html(),
        states = states,
    ))
}
