//! Loader Errors
//!
//! `FetchError` giữ nguyên nguyên nhân gốc (status, network, body, file).
//! `LoadError` là lỗi duy nhất hiển thị cho người dùng, message cố định.

use thiserror::Error;

use crate::constants::LOAD_ERROR_MESSAGE;

/// Raw failure while reading the data source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),
    /// Response body could not be read as text
    #[error("Body read error: {0}")]
    Body(String),
    /// Local file source could not be read
    #[error("File read error: {0}")]
    Io(String),
}

impl FetchError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// User-facing load failure.
///
/// Always displays the fixed localized message; the original cause is kept
/// for logging and is reachable through `cause()` / `Error::source()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", LOAD_ERROR_MESSAGE)]
pub struct LoadError {
    #[source]
    cause: FetchError,
}

impl LoadError {
    pub fn new(cause: FetchError) -> Self {
        Self { cause }
    }

    /// Structured original failure
    pub fn cause(&self) -> &FetchError {
        &self.cause
    }

    /// Fixed message shown to the operator
    pub fn message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

impl From<FetchError> for LoadError {
    fn from(cause: FetchError) -> Self {
        LoadError::new(cause)
    }
}
