//! The fragment injected into a widget's container.

use quick_xml::escape::escape;

use crate::constants::*;
use crate::source::ImageSource;
use crate::state::WidgetState;
use crate::target::Control;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub widget_id: String,
    pub image_id: String,
    pub image_src: String,
    pub counter_id: String,
    pub counter_text: String,
    pub source: ImageSource,
}

impl Markup {
    pub fn new(widget_id: &str, source: &ImageSource, state: &WidgetState) -> Self {
        Self {
            widget_id: widget_id.to_string(),
            image_id: image_id(widget_id),
            image_src: source.uri_for(state.current()),
            counter_id: counter_id(widget_id),
            counter_text: state.counter_text(),
            source: source.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div style="text-align:center;">
  <img id="{image_id}" src="{src}" width="{width}" style="border:1px solid #ccc; margin-bottom:10px;">
  <br>
  {previous}
  <span id="{counter_id}" style="margin: 0 20px;">{counter}</span>
  {next}
</div>
"#,
            image_id = escape(self.image_id.as_str()),
            src = escape(self.image_src.as_str()),
            width = IMAGE_WIDTH,
            previous = self.button_html(Control::Previous),
            counter_id = escape(self.counter_id.as_str()),
            counter = escape(self.counter_text.as_str()),
            next = self.button_html(Control::Next),
        )
    }

    fn button_html(&self, control: Control) -> String {
        let label = match control {
            Control::Previous => PREVIOUS_LABEL,
            Control::Next => NEXT_LABEL,
        };
        // JSON string literals are valid JS; the attribute escaping is undone by the browser
        let mut call = format!(
            "{}({},{},{}",
            control.handler(),
            js_string(&self.widget_id),
            js_string(&self.source.base_uri),
            js_string(&self.source.ext),
        );
        if self.source.pad > 0 {
            call.push_str(&format!(",{}", self.source.pad));
        }
        call.push(')');
        format!(
            r#"<button onclick="{}" class="pushable"><span class="front">{}</span></button>"#,
            escape(call.as_str()),
            label
        )
    }
}

pub fn image_id(widget_id: &str) -> String {
    format!("{widget_id}_img")
}

pub fn counter_id(widget_id: &str) -> String {
    format!("{widget_id}_ctr")
}

/// Script statements seeding the handler state of one widget.
pub fn state_script(widget_id: &str, state: &WidgetState) -> String {
    let id = js_string(widget_id);
    format!(
        "currentSlide[{id}] = {}; firstSlide[{id}] = {}; lastSlide[{id}] = {};\n",
        state.current(),
        state.first(),
        state.last(),
    )
}

fn js_string(value: &str) -> String {
    // `</` would close an inline <script> early
    serde_json::Value::from(value).to_string().replace("</", "<\\/")
}
