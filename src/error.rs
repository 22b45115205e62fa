use thiserror::Error;

/// Failures a caller can recover from when driving a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("no container element with id `{0}`")]
    MissingContainer(String),
    #[error("invalid slide range {start}-{end}: start is after end")]
    InvalidRange { start: i64, end: i64 },
    #[error("widget `{0}` has not been initialized")]
    UnknownWidget(String),
}
