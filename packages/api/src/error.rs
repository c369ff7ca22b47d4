use thiserror::Error;

/// Errors surfaced by calls to the backend.
///
/// `Network` means no HTTP response arrived at all; `Status` carries the
/// backend's verdict; `Decode` means a 2xx body did not match the expected
/// shape. There are no retries at this layer.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned {code}: {detail}")]
    Status { code: u16, detail: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status, when the backend answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// A draft failed validation. Nothing was sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidDraft {
    /// Input the message points at, when it concerns a single field.
    pub field: Option<&'static str>,
    pub message: String,
}

impl InvalidDraft {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }
}
