//! Process exit codes (BSD sysexits.h compatible where one applies)

/// Successful termination
pub const OK: u8 = 0;

/// Generic failure (lookup miss, internal error)
pub const FAILURE: u8 = 1;

/// Command line usage error reported by clap
pub const CLAP_USAGE: u8 = 2;

/// Semantically invalid input
pub const USAGE: u8 = 64;

/// Item source unavailable or failing
pub const UNAVAILABLE: u8 = 69;

/// Configuration error, including a missing credential
pub const CONFIG: u8 = 78;
