//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `CookieError`, so functions can simply return
//! `Result<T>`.
use crate::error::CookieError;

/// Workspace-wide `Result` alias with `CookieError` as the default error.
pub type Result<T, E = CookieError> = std::result::Result<T, E>;
