//! Evaluator tests.
//!
//! - `operators_tests`: binary operator semantics on values
//! - `unary_operators_tests`: `-` and `!`
//! - `interpreter_tests`: whole expressions from source text
//! - `properties`: equality laws and arithmetic over generated values

mod properties;
mod unary_operators_tests;
