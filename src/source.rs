use serde::Deserialize;

/// Naming arguments captured when a widget is built: images live at
/// `{base_uri}{index}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSource {
    pub base_uri: String,
    pub ext: String,
    /// Zero-pad the index to this many digits. 0 leaves it as is.
    #[serde(default)]
    pub pad: usize,
}

impl ImageSource {
    pub fn new(base_uri: impl Into<String>, ext: impl Into<String>) -> Self {
        Self { base_uri: base_uri.into(), ext: ext.into(), pad: 0 }
    }

    pub fn with_pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    pub fn uri_for(&self, index: i64) -> String {
        format!("{}{:0pad$}.{}", self.base_uri, index, self.ext, pad = self.pad)
    }
}
