//! Stable exit codes for puzzle CLI commands.

/// Command succeeded and its answer was printed.
pub const OK: i32 = 0;
/// Command failed: unreadable input or config, malformed input, or unsolvable
/// input such as cyclic ordering rules.
pub const INVALID: i32 = 1;
