//! Process exit codes (BSD sysexits.h compatible)

/// Bad command line
pub const USAGE: i32 = 64;

/// Input file is malformed or empty
pub const DATAERR: i32 = 65;

/// Input file missing or unreadable
pub const NOINPUT: i32 = 66;

/// Broken internal invariant
pub const SOFTWARE: i32 = 70;

/// Terminal read/write failed
pub const IOERR: i32 = 74;

/// Configuration file could not be loaded
pub const CONFIG: i32 = 78;
