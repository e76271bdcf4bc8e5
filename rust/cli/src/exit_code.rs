//! Process exit codes returned by [`run`](crate::run).

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, engine or I/O errors.
pub const ERROR: i32 = 2;

/// A simulation stopped before finishing all of its games.
pub const INTERRUPTED: i32 = 130;
