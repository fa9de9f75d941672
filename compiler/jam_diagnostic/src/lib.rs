//! Diagnostics shared by every phase of the Jam toolchain.
//!
//! Each phase's error type knows its [`ErrorCode`] and can lower itself to a
//! [`Diagnostic`]. The CLI renders diagnostics with [`emitter::render`] and
//! serves long-form explanations from [`ErrorDocs`].

mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
