use crate::parse;
use lox_ir::render;
use proptest::prelude::*;

fn term_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("or")]
}

proptest! {
    #[test]
    fn same_level_chains_fold_left(
        first in 0u32..100,
        rest in proptest::collection::vec((term_op(), 0u32..100), 1..8),
    ) {
        let mut source = first.to_string();
        let mut expected = first.to_string();
        for (op, n) in &rest {
            source.push_str(&format!(" {op} {n}"));
            expected = format!("({op} {expected} {n})");
        }
        let tokens = lox_lexer::scan(&source).tokens;
        let expr = parse(&tokens);
        prop_assert_eq!(expr.map(|e| render(&e)), Ok(expected));
    }

    #[test]
    fn grouping_depth_is_preserved(depth in 1usize..64, n in 0u32..1000) {
        let source = format!("{}{n}{}", "(".repeat(depth), ")".repeat(depth));
        let expected = format!("{}{n}{}", "(group ".repeat(depth), ")".repeat(depth));
        let tokens = lox_lexer::scan(&source).tokens;
        prop_assert_eq!(parse(&tokens).map(|e| render(&e)), Ok(expected));
    }

    #[test]
    fn parse_never_panics(source in "[0-9a-z()+*/!<>=\" .-]{0,40}") {
        let tokens = lox_lexer::scan(&source).tokens;
        let _ = parse(&tokens);
    }
}
