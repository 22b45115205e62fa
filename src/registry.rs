use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::ErrorKind;
use crate::markup::Markup;
use crate::source::ImageSource;
use crate::state::WidgetState;
use crate::target::{Binding, Control, RenderTarget};

/// Owns the state of every widget on one surface, keyed by widget id.
#[derive(Debug, Default)]
pub struct SlideshowRegistry {
    widgets: HashMap<String, WidgetState>,
}

impl SlideshowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, widget_id: &str) -> Option<&WidgetState> {
        self.widgets.get(widget_id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Builds the widget's markup into its container and wires the controls.
    /// Re-initializing an existing widget resets it to `start`.
    pub fn initialize<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        widget_id: &str,
        source: &ImageSource,
        start: i64,
        end: i64,
    ) -> Result<(), ErrorKind> {
        let state = WidgetState::new(start, end)?;
        let markup = Markup::new(widget_id, source, &state);
        target.mount(widget_id, &markup)?;

        for control in [Control::Previous, Control::Next] {
            target.bind_control(
                widget_id,
                Binding { control, widget_id: widget_id.to_string(), source: source.clone() },
            );
        }

        debug!(widget_id, start, end, base_uri = %source.base_uri, ext = %source.ext, "initialized slideshow");
        self.widgets.insert(widget_id.to_string(), state);
        Ok(())
    }

    pub fn render<T: RenderTarget + ?Sized>(
        &self,
        target: &mut T,
        widget_id: &str,
        source: &ImageSource,
    ) -> Result<(), ErrorKind> {
        let state = self
            .widgets
            .get(widget_id)
            .ok_or_else(|| ErrorKind::UnknownWidget(widget_id.to_string()))?;
        let uri = source.uri_for(state.current());
        trace!(widget_id, %uri, "render");
        target.set_image_source(widget_id, &uri);
        target.set_counter_text(widget_id, &state.counter_text());
        Ok(())
    }

    pub fn advance<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        widget_id: &str,
        source: &ImageSource,
    ) -> Result<(), ErrorKind> {
        self.state_mut(widget_id)?.advance();
        self.render(target, widget_id, source)
    }

    pub fn retreat<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        widget_id: &str,
        source: &ImageSource,
    ) -> Result<(), ErrorKind> {
        self.state_mut(widget_id)?.retreat();
        self.render(target, widget_id, source)
    }

    /// Runs the transition a control was bound to, with its captured arguments.
    pub fn dispatch<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        binding: &Binding,
    ) -> Result<(), ErrorKind> {
        match binding.control {
            Control::Previous => self.retreat(target, &binding.widget_id, &binding.source),
            Control::Next => self.advance(target, &binding.widget_id, &binding.source),
        }
    }

    fn state_mut(&mut self, widget_id: &str) -> Result<&mut WidgetState, ErrorKind> {
        self.widgets
            .get_mut(widget_id)
            .ok_or_else(|| ErrorKind::UnknownWidget(widget_id.to_string()))
    }
}
