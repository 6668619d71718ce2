//! Process exit codes

/// The command ran and produced its output
pub const EXIT_SUCCESS: i32 = 0;

/// The remote call failed
pub const EXIT_ERROR: i32 = 1;

/// The invocation was rejected before anything was sent
pub const EXIT_CONFIG: i32 = 2;

/// Confirmation was declined; nothing was sent
pub const EXIT_SKIPPED: i32 = 3;

/// Interrupted by Ctrl-C
pub const EXIT_CANCELLED: i32 = 130;
