use thiserror::Error;

/// Fallback shown when an error response carries no `message` field.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors produced by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.  `message` is the
    /// JSON `message` field when present, a generic fallback otherwise.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// An upload batch reported no successful file.
    #[error("Upload rejected for '{0}'")]
    UploadRejected(String),
}
