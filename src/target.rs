use crate::error::ErrorKind;
use crate::markup::Markup;
use crate::source::ImageSource;

/// The two controls injected with every widget.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Control {
    Previous, // retreats
    Next,     // advances
}

impl Control {
    /// Name of the host-page handler the control calls.
    pub fn handler(&self) -> &'static str {
        match self {
            Control::Previous => "prevSlide",
            Control::Next => "nextSlide",
        }
    }
}

/// What activating a control does: the control plus the arguments captured
/// when the markup was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub control: Control,
    pub widget_id: String,
    pub source: ImageSource,
}

/// A surface widgets are drawn onto: a page, a window, a test double.
pub trait RenderTarget {
    /// Replaces the whole content of the container `widget_id` with `markup`.
    fn mount(&mut self, widget_id: &str, markup: &Markup) -> Result<(), ErrorKind>;
    fn set_image_source(&mut self, widget_id: &str, uri: &str);
    fn set_counter_text(&mut self, widget_id: &str, text: &str);
    fn bind_control(&mut self, widget_id: &str, binding: Binding);
}
