//! Page description loaded from TOML.
//!
//! ```toml
//! title = "Pushover analysis"
//!
//! [[widget]]
//! id = "pushover"
//! base_uri = "_static/slides/slide_"
//! ext = "jpg"
//! start = 1
//! end = 12
//! pad = 2
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::source::ImageSource;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Host script providing the `prevSlide`/`nextSlide` handlers and the
    /// `currentSlide`/`firstSlide`/`lastSlide` maps. Handlers are inlined when unset.
    pub script: Option<String>,
    #[serde(rename = "widget", default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    pub id: String,
    #[serde(flatten)]
    pub source: ImageSource,
    pub start: i64,
    pub end: i64,
}

fn default_title() -> String {
    "Slideshow".to_string()
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.widgets.is_empty() {
            bail!("no [[widget]] entries");
        }
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            if widget.id.is_empty() {
                bail!("widget id must not be empty");
            }
            if !seen.insert(widget.id.as_str()) {
                bail!("duplicate widget id `{}`", widget.id);
            }
            // Host scripts take three handler arguments; only the inlined handlers pad
            if widget.source.pad > 0 && self.script.is_some() {
                bail!(
                    "widget `{}` sets pad, which needs the inlined handlers: remove `script`",
                    widget.id
                );
            }
        }
        Ok(())
    }
}
