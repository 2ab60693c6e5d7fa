//! Error types for the activation core.
//!
//! # Design
//! The only thing that can go wrong before a status is known is that the
//! southbound request never yields an HTTP response. Any HTTP status at all,
//! 5xx included, is a result and not an error; the status mapper decides what
//! it means.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivationError {
    /// Connection refused, DNS failure, malformed URL, broken body stream.
    #[error("southbound transport failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ActivationError>;
