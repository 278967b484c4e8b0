use std::sync::Arc;

/// Result type for operations that decode host-supplied input.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding host-supplied input.
///
/// Rendering itself never fails. These errors only surface from the strict parsing entry points
/// (e.g., [`AttributeSchema::from_json`](crate::AttributeSchema::from_json) or
/// `"ios".parse::<SdkLanguage>()`).
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The language identifier is not one of the known SDK languages.
    #[error("unknown sdk language: {0:?}")]
    UnknownLanguage(String),

    /// The attribute schema is not valid JSON or does not have the expected shape.
    #[error("invalid attribute schema")]
    // serde_json::Error is not clonable, so we're wrapping it in an Arc.
    InvalidSchema(#[source] Arc<serde_json::Error>),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidSchema(Arc::new(value))
    }
}
