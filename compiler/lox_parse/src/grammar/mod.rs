//! Grammar rules, one `impl Parser` block per rule group.

mod expr;
