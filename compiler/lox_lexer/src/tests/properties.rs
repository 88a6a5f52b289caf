use crate::scan;
use lox_ir::{Literal, TokenKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn always_ends_with_one_eof(source in any::<String>()) {
        let output = scan(&source);
        let eofs = output.tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(output.tokens.last().is_some_and(lox_ir::Token::is_eof));
    }

    #[test]
    fn lexemes_are_source_substrings(source in "[ -~\n]{0,64}") {
        let output = scan(&source);
        for token in &output.tokens {
            prop_assert!(source.contains(token.lexeme.as_str()));
        }
    }

    #[test]
    fn decimal_literals_decode(int in 0u32..1_000_000, frac in 0u32..1000) {
        let text = format!("{int}.{frac}");
        let output = scan(&text);
        prop_assert!(!output.has_errors());
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].kind, TokenKind::Number);
        let expected: f64 = text.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(output.tokens[0].literal.clone(), Some(Literal::Number(expected)));
    }

    #[test]
    fn line_count_matches_newlines(lines in proptest::collection::vec("[a-z0-9 +*]{0,8}", 1..20)) {
        let source = lines.join("\n");
        let output = scan(&source);
        let expected = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        prop_assert_eq!(output.tokens.last().map(|t| t.line), Some(expected));
    }
}
