//! Parser tests.
//!
//! - `parser`: precedence, associativity, literals and error reporting
//! - `properties`: associativity and nesting over generated input

mod properties;
