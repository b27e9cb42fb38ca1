//! Exit code constants for the areasync CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, missing template)
//! - 2: Validation failure (template and generated file disagree)
//! - 3: I/O failure (reading or writing a file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid manifest, or missing template.
pub const USER_ERROR: i32 = 1;

/// Validation failure: unterminated, duplicate, or mismatched workflow areas.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: a template or target could not be read or written.
pub const IO_FAILURE: i32 = 3;
