//! Scanner tests.
//!
//! - `scanner`: token kinds, literals, lines and error recovery
//! - `properties`: totality and number decoding over generated input

mod properties;
