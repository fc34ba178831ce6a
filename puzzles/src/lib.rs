//! Line-oriented puzzle solvers.
//!
//! Each solver reads a small text input, applies a fixed rule, and prints one
//! or two numbers. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic parsing and solving. The page-ordering
//!   checker in [`core::ordering`] is the centrepiece; the map solvers share
//!   [`core::grid`], and the rest are string and arithmetic transformations.
//! - **[`io`]**: Side-effecting operations (input files, configuration).
//!
//! [`solve`] joins the two to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
