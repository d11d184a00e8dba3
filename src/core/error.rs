//! Errors surfaced to callers of the converter.

use thiserror::Error;

/// Caller misuse. Retrieval failures never appear here; they are reported
/// through the rate sentinel instead.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// An argument was outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
