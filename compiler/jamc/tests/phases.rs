// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based driver tests.
//!
//! Inline `#[cfg(test)]` modules in each crate cover that crate alone. The
//! tests here run whole programs through the driver's pipeline, and the
//! `jam` binary itself.
//!
//! # Organization
//!
//! - `parse/` - Lexer and printer behavior seen through the pipeline
//! - `check/` - Lexical and flat context checks
//! - `eval/` - The demo programs under every policy
//! - `cli/` - The `jam` binary: output streams and exit codes
//! - `common/` - Shared test utilities
//!
//! # Running Phase Tests
//!
//! ```bash
//! cargo test -p jamc --test phases
//! cargo test -p jamc --test phases cli
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/check/mod.rs"]
mod check;

#[path = "phases/eval/mod.rs"]
mod eval;

#[path = "phases/cli/mod.rs"]
mod cli;
