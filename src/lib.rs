//! Process termination constants, shared between CLI entry points and
//! error-handling code.

// Exit codes are taken from the platform libc instead of being hardcoded,
// so they always match what <stdlib.h> defines for the target.

/// Exit code for successful termination of a program.
pub const EXIT_SUCCESS: i32 = libc::EXIT_SUCCESS;

/// Exit code for unsuccessful termination of a program.
/// E.g. resource not available, permission denied, etc.
pub const EXIT_FAILURE: i32 = libc::EXIT_FAILURE;

/// Identifier for errors whose kind cannot be determined.
/// Used by catch-all handlers when formatting a diagnostic.
pub const UNKNOWN_EXCEPTION: &str = "Unknown exception";
