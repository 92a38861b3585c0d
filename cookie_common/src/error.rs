//! Error types shared by the codec library and the CLI.
//!
//! The `CookieError` enum unifies classification, validation, rendering and
//! I/O failures so that every layer can propagate a single error type with `?`.
use std::io;

use thiserror::Error;

/// Unified error type for cookie encoding and decoding.
#[derive(Error, Debug)]
pub enum CookieError {
    /// No argument was given, or it matched neither an endpoint nor a cookie.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Endpoint input is malformed, or an octet/port lies outside its range.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Cookie input does not have the `<int>.<int>.0000` shape or its values
    /// do not fit the encoded widths.
    #[error("Malformed cookie: {0}")]
    MalformedCookie(String),

    /// Failure while rendering JSON output via serde_json.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing the result.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CookieError {
    /// Returns `true` for errors caused by what the user typed, as opposed
    /// to failures while producing output.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CookieError::Usage(_) | CookieError::InvalidAddress(_) | CookieError::MalformedCookie(_)
        )
    }
}
