//! Diagnostic system for the Lox front-end.
//!
//! Every phase reports failures with its own error type; this crate gives
//! them a common reporting surface:
//! - [`ErrorCode`]: stable, searchable identifiers (`E0001`, `E1002`, ...)
//! - [`Diagnostic`]: code + message + source line + notes
//! - [`emitter`]: renders diagnostics for humans

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, Phase};
