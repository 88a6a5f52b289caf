use super::*;
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::Str(String::new()).is_truthy());
}

#[test]
fn equality_never_coerces() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(1.0), Value::Str("1".into()));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::Str("nil".into()), Value::Nil);
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn display() {
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Str("ab".into()).to_string(), "ab");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn from_literal() {
    assert_eq!(Value::from(&Literal::Number(4.0)), Value::Number(4.0));
    assert_eq!(Value::from(&Literal::Str("s".into())), Value::Str("s".into()));
    assert_eq!(Value::from(&Literal::Bool(false)), Value::Bool(false));
    assert_eq!(Value::from(&Literal::Nil), Value::Nil);
}

#[test]
fn type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::Str(String::new()).type_name(), "string");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Nil.type_name(), "nil");
}
