use crate::operators::evaluate_binary;
use crate::Value;
use lox_ir::BinaryOp;
use proptest::prelude::*;

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::Str),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Nil),
    ]
}

proptest! {
    #[test]
    fn equality_is_reflexive(v in value()) {
        prop_assert_eq!(
            evaluate_binary(v.clone(), v, BinaryOp::Eq),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn equality_is_symmetric(a in value(), b in value()) {
        prop_assert_eq!(
            evaluate_binary(a.clone(), b.clone(), BinaryOp::Eq),
            evaluate_binary(b, a, BinaryOp::Eq)
        );
    }

    #[test]
    fn not_equal_is_negated_equal(a in value(), b in value()) {
        let eq = evaluate_binary(a.clone(), b.clone(), BinaryOp::Eq);
        let ne = evaluate_binary(a, b, BinaryOp::NotEq);
        match (eq, ne) {
            (Ok(Value::Bool(x)), Ok(Value::Bool(y))) => prop_assert_eq!(x, !y),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn nil_equals_only_nil(v in value()) {
        let expected = v == Value::Nil;
        prop_assert_eq!(
            evaluate_binary(Value::Nil, v, BinaryOp::Eq),
            Ok(Value::Bool(expected))
        );
    }

    #[test]
    fn addition_matches_f64(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        prop_assert_eq!(
            evaluate_binary(Value::Number(a), Value::Number(b), BinaryOp::Add),
            Ok(Value::Number(a + b))
        );
    }
}
