//! Error types for areasync.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::validate::ConsistencyReport;
use thiserror::Error;

/// Main error type for areasync operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum SyncError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template and its generated file are structurally inconsistent.
    #[error("Validation failed: {0}")]
    ValidationError(ConsistencyReport),

    /// One or more generated files drifted from their templates.
    #[error("Validation failed: {0} generated file(s) out of sync with their templates")]
    OutOfSync(usize),

    /// Reading or writing a file failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::UserError(_) => exit_codes::USER_ERROR,
            SyncError::ValidationError(_) | SyncError::OutOfSync(_) => {
                exit_codes::VALIDATION_FAILURE
            }
            SyncError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for areasync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
