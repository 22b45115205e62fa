//! A keyed slideshow widget: numbered images cycled with Previous/Next
//! controls and a `Slide n of first-last` counter, drawn onto any
//! [`RenderTarget`] (an HTML page, a native window, a test double).

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod markup;
pub mod page;
pub mod registry;
pub mod source;
pub mod state;
pub mod target;
pub mod texture_loader;
pub mod viewer;

pub use document::Document;
pub use error::ErrorKind;
pub use registry::SlideshowRegistry;
pub use source::ImageSource;
pub use state::WidgetState;
pub use target::{Binding, Control, RenderTarget};
