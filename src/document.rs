//! In-memory host page: containers addressed by id.

use quick_xml::escape::escape;

use crate::error::ErrorKind;
use crate::markup::Markup;
use crate::target::{Binding, Control, RenderTarget};

#[derive(Debug, Default)]
struct Container {
    id: String,
    widget: Option<Mounted>,
}

#[derive(Debug)]
struct Mounted {
    markup: Markup,
    bindings: Vec<Binding>,
}

#[derive(Debug, Default)]
pub struct Document {
    containers: Vec<Container>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty container, unless one with this id already exists.
    pub fn add_container(&mut self, id: &str) {
        if self.container(id).is_none() {
            self.containers.push(Container { id: id.to_string(), widget: None });
        }
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.container(id).is_some()
    }

    pub fn image_source(&self, widget_id: &str) -> Option<&str> {
        self.mounted(widget_id).map(|m| m.markup.image_src.as_str())
    }

    pub fn counter_text(&self, widget_id: &str) -> Option<&str> {
        self.mounted(widget_id).map(|m| m.markup.counter_text.as_str())
    }

    /// Content of the container, empty if nothing was mounted into it.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.container(id)
            .map(|c| c.widget.as_ref().map(|m| m.markup.to_html()).unwrap_or_default())
    }

    /// The binding a click on `control` would run.
    pub fn click(&self, widget_id: &str, control: Control) -> Option<Binding> {
        self.mounted(widget_id)?
            .bindings
            .iter()
            .find(|b| b.control == control)
            .cloned()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for container in &self.containers {
            html.push_str(&format!("<div id=\"{}\">\n", escape(container.id.as_str())));
            if let Some(mounted) = &container.widget {
                html.push_str(&mounted.markup.to_html());
            }
            html.push_str("</div>\n");
        }
        html
    }

    fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    fn mounted(&self, id: &str) -> Option<&Mounted> {
        self.container(id)?.widget.as_ref()
    }

    fn mounted_mut(&mut self, id: &str) -> Option<&mut Mounted> {
        self.containers.iter_mut().find(|c| c.id == id)?.widget.as_mut()
    }
}

impl RenderTarget for Document {
    fn mount(&mut self, widget_id: &str, markup: &Markup) -> Result<(), ErrorKind> {
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.id == widget_id)
            .ok_or_else(|| ErrorKind::MissingContainer(widget_id.to_string()))?;
        container.widget = Some(Mounted { markup: markup.clone(), bindings: Vec::new() });
        Ok(())
    }

    fn set_image_source(&mut self, widget_id: &str, uri: &str) {
        if let Some(mounted) = self.mounted_mut(widget_id) {
            mounted.markup.image_src = uri.to_string();
        }
    }

    fn set_counter_text(&mut self, widget_id: &str, text: &str) {
        if let Some(mounted) = self.mounted_mut(widget_id) {
            mounted.markup.counter_text = text.to_string();
        }
    }

    fn bind_control(&mut self, widget_id: &str, binding: Binding) {
        if let Some(mounted) = self.mounted_mut(widget_id) {
            mounted.bindings.retain(|b| b.control != binding.control);
            mounted.bindings.push(binding);
        }
    }
}
