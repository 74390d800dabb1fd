//! API error type

use thiserror::Error;

/// A failed API call
///
/// Never retried; the command stops at the first one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a status other than 200/202
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Invalid JSON in response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },
}
