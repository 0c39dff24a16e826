use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by every API method.
///
/// `Api` is the normalized form of any non-2xx response from the service;
/// the other variants surface faults below the HTTP contract (no response
/// at all, or a body that does not match the declared shape).
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-success status code.
    #[error("request failed with status {status}: {message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Cause message selected by status-code lookup.
        message: &'static str,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("transport error: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body could not be parsed into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Normalize a failed response status into the domain error.
    ///
    /// This is the single mapping shared by all sub-clients.
    pub(crate) fn from_status(status: u16) -> Self {
        Error::Api {
            status,
            message: status_message(status),
        }
    }

    /// Status code carried by an `Api` error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_message(status: u16) -> &'static str {
    match status {
        400 => "request had invalid syntax or parameters",
        401 => "API authorization failed",
        403 => "caller lacks permission for this endpoint",
        404 => "no route matches the given resource",
        500 => "upstream encountered an unexpected condition",
        _ => "upstream returned an unexpected status",
    }
}
