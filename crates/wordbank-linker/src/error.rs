//! Error types for Linker operations

use thiserror::Error;

/// Errors that can occur during a linking run
///
/// Unresolved tokens and self-references are not errors; they are recorded
/// in the [`LinkReport`](crate::LinkReport).
#[derive(Error, Debug)]
pub enum LinkerError {
    /// Storage layer error (fatal for the batch)
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
