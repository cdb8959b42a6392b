use thiserror::Error;

use crate::upload::FileSource;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server responded with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("Invalid response payload: {0}")]
    Decode(String),
    #[error("Upload was not accepted by the server")]
    UploadRejected,
}

impl ApiError {
    /// The `message` field the server put in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Why a selected file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    NoFile,
    UnsupportedType,
    TooLarge { size: u64 },
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{}", .origin.rejection_message())]
pub struct ValidationError {
    pub origin: FileSource,
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    #[error("Image upload failed. Please try again.")]
    Api(#[from] ApiError),
    #[error("Image upload failed. Please try again.")]
    Aborted(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
