use super::*;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

fn op_token(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, None, 1)
}

#[test]
fn symbols() {
    assert_eq!(BinaryOp::GtEq.as_symbol(), ">=");
    assert_eq!(BinaryOp::Or.as_symbol(), "or");
    assert_eq!(UnaryOp::Not.as_symbol(), "!");
}

#[test]
fn constructors_box_children() {
    let expr = Expr::binary(
        BinaryOp::Add,
        op_token(TokenKind::Plus, "+"),
        Expr::literal(Literal::Number(1.0)),
        Expr::grouping(Expr::unary(
            UnaryOp::Neg,
            op_token(TokenKind::Minus, "-"),
            Expr::literal(Literal::Number(2.0)),
        )),
    );

    let Expr::Binary { op, left, right, .. } = &expr else {
        panic!("expected binary node");
    };
    assert_eq!(*op, BinaryOp::Add);
    assert_eq!(**left, Expr::Literal(Literal::Number(1.0)));
    assert!(matches!(**right, Expr::Grouping(_)));
}

fn nested(depth: usize) -> Expr {
    let mut expr = Expr::literal(Literal::Number(1.0));
    for i in 0..depth {
        expr = match i % 3 {
            0 => Expr::grouping(expr),
            1 => Expr::unary(UnaryOp::Neg, op_token(TokenKind::Minus, "-"), expr),
            _ => Expr::binary(
                BinaryOp::Add,
                op_token(TokenKind::Plus, "+"),
                expr,
                Expr::literal(Literal::Str("x".to_owned())),
            ),
        };
    }
    expr
}

#[test]
fn very_deep_tree_drops_without_overflow() {
    drop(nested(1_000_000));
}
