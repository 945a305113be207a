//! Reader failure taxonomy. Every variant is recovered by the aggregator.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("source unavailable: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected format: {0}")]
    Parse(String),
    #[error("fallback command timed out")]
    Timeout,
    #[error("fallback command failed: {0}")]
    CommandFailed(String),
}
