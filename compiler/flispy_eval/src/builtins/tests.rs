//! Builtins called directly on argument lists, bypassing the reader.

use super::*;
use crate::errors::LispError;
use pretty_assertions::assert_eq;

fn args(items: Vec<Value>) -> ExprList {
    items.into_iter().collect()
}

fn nums(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::Number).collect()
}

fn qexpr(ns: &[i64]) -> Value {
    Value::QExpr(args(nums(ns)))
}

fn call(name: &str, items: Vec<Value>) -> Value {
    let evaluator = Evaluator::new();
    let builtin = evaluator
        .builtins()
        .get(name)
        .unwrap_or_else(|| panic!("builtin {name} should be registered"));
    builtin.call(&evaluator, args(items))
}

// Table

#[test]
fn test_standard_table_names() {
    let table = BuiltinTable::standard();
    assert_eq!(
        table.names(),
        vec!["%", "*", "+", "-", "/", "^", "eval", "head", "join", "list", "tail"]
    );
    assert_eq!(table.len(), 11);
    assert!(table.contains("join"));
    assert!(!table.contains("def"));
}

#[test]
fn test_register_replaces_entry() {
    fn always_zero(_: &Evaluator, _: ExprList) -> BuiltinResult {
        Ok(Value::number(0))
    }

    let mut table = BuiltinTable::new();
    assert!(table.is_empty());
    assert!(table.register("zero", always_zero).is_none());
    let replaced = table.register("zero", always_zero);
    assert_eq!(replaced.map(|b| b.name()), Some("zero"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_builtin_errors_become_values() {
    assert_eq!(
        call("head", vec![Value::number(5)]),
        Value::Error(LispError::WrongType {
            function: "head",
            expected: "q-expression",
            got: "number",
        })
    );
}

// Arithmetic

#[test]
fn test_arith_op_symbols() {
    for symbol in ["+", "-", "*", "/", "%", "^"] {
        let op = ArithOp::from_symbol(symbol);
        assert_eq!(op.map(ArithOp::as_symbol), Some(symbol));
    }
    assert_eq!(ArithOp::from_symbol("head"), None);
}

#[test]
fn test_arithmetic_folds_left_to_right() {
    assert_eq!(call("+", nums(&[1, 2, 3])), Value::number(6));
    assert_eq!(call("-", nums(&[10, 3, 2])), Value::number(5));
    assert_eq!(call("*", nums(&[2, 3, 4])), Value::number(24));
    assert_eq!(call("/", nums(&[100, 5, 2])), Value::number(10));
    assert_eq!(call("%", nums(&[7, 3])), Value::number(1));
    assert_eq!(call("^", nums(&[2, 3, 2])), Value::number(64));
}

#[test]
fn test_single_argument() {
    assert_eq!(call("-", nums(&[5])), Value::number(-5));
    assert_eq!(call("+", nums(&[5])), Value::number(5));
    assert_eq!(call("*", nums(&[-5])), Value::number(-5));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(call("/", nums(&[-7, 2])), Value::number(-3));
    assert_eq!(call("%", nums(&[-7, 2])), Value::number(-1));
}

#[test]
fn test_division_by_zero_aborts_fold() {
    let expected = Value::Error(LispError::DivisionByZero);
    assert_eq!(call("/", nums(&[1, 0])), expected);
    assert_eq!(call("%", nums(&[1, 0])), expected);
    assert_eq!(call("/", nums(&[10, 0, 2])), expected);
}

#[test]
fn test_non_number_argument() {
    assert_eq!(
        call("+", vec![Value::number(1), qexpr(&[2])]).to_string(),
        "Error: cannot operate on a non-number"
    );
    assert!(call("*", vec![Value::symbol("x")]).is_error());
}

#[test]
fn test_non_number_error_records_operator_and_type() {
    assert_eq!(
        call("-", vec![Value::number(1), Value::symbol("x")]),
        Value::Error(LispError::NotANumber {
            function: "-",
            got: "symbol",
        })
    );
}

#[test]
fn test_no_arguments() {
    assert_eq!(
        call("+", vec![]),
        Value::Error(LispError::NoArguments { function: "+" })
    );
}

#[test]
fn test_overflow_is_detected() {
    let overflow = |operation| Value::Error(LispError::IntegerOverflow { operation });
    assert_eq!(call("+", nums(&[i64::MAX, 1])), overflow("addition"));
    assert_eq!(call("-", nums(&[i64::MIN, 1])), overflow("subtraction"));
    assert_eq!(call("*", nums(&[i64::MAX, 2])), overflow("multiplication"));
    assert_eq!(call("/", nums(&[i64::MIN, -1])), overflow("division"));
    assert_eq!(call("%", nums(&[i64::MIN, -1])), overflow("remainder"));
    assert_eq!(call("-", nums(&[i64::MIN])), overflow("negation"));
    assert_eq!(call("^", nums(&[10, 19])), overflow("exponentiation"));
}

#[test]
fn test_power() {
    assert_eq!(call("^", nums(&[2, 10])), Value::number(1024));
    assert_eq!(call("^", nums(&[-3, 3])), Value::number(-27));
    assert_eq!(call("^", nums(&[0, 0])), Value::number(1));
    assert_eq!(call("^", nums(&[10, 18])), Value::number(1_000_000_000_000_000_000));
}

#[test]
fn test_power_huge_exponent() {
    let huge = i64::from(u32::MAX) + 1;
    assert_eq!(call("^", nums(&[1, huge])), Value::number(1));
    assert_eq!(call("^", nums(&[0, huge])), Value::number(0));
    assert_eq!(call("^", nums(&[-1, huge])), Value::number(1));
    assert_eq!(call("^", nums(&[-1, huge + 1])), Value::number(-1));
    assert!(call("^", nums(&[2, huge])).is_error());
}

#[test]
fn test_negative_exponent() {
    assert_eq!(
        call("^", nums(&[2, -1])),
        Value::Error(LispError::NegativeExponent)
    );
}

// List functions

#[test]
fn test_list_retags_arguments() {
    assert_eq!(call("list", nums(&[1, 2, 3, 4])), qexpr(&[1, 2, 3, 4]));
    assert_eq!(call("list", vec![]), Value::qexpr());
}

#[test]
fn test_head() {
    assert_eq!(call("head", vec![qexpr(&[1, 2, 3, 4])]), qexpr(&[1]));
}

#[test]
fn test_tail() {
    assert_eq!(call("tail", vec![qexpr(&[1, 2, 3, 4])]), qexpr(&[2, 3, 4]));
    assert_eq!(call("tail", vec![qexpr(&[1])]), Value::qexpr());
}

#[test]
fn test_head_and_tail_preconditions() {
    for name in ["head", "tail"] {
        assert!(matches!(
            call(name, vec![Value::qexpr()]),
            Value::Error(LispError::EmptyList { .. })
        ));
        assert!(matches!(
            call(name, vec![Value::number(5)]),
            Value::Error(LispError::WrongType { got: "number", .. })
        ));
        assert!(matches!(
            call(name, vec![qexpr(&[1]), qexpr(&[2])]),
            Value::Error(LispError::WrongArgCount { expected: 1, got: 2, .. })
        ));
        assert!(matches!(
            call(name, vec![]),
            Value::Error(LispError::WrongArgCount { expected: 1, got: 0, .. })
        ));
    }
}

#[test]
fn test_join() {
    assert_eq!(
        call("join", vec![qexpr(&[1, 2]), qexpr(&[3, 4])]),
        qexpr(&[1, 2, 3, 4])
    );
    assert_eq!(
        call("join", vec![qexpr(&[1]), qexpr(&[]), qexpr(&[2]), qexpr(&[3])]),
        qexpr(&[1, 2, 3])
    );
    assert_eq!(call("join", vec![]), Value::qexpr());
}

#[test]
fn test_join_rejects_non_qexpr() {
    assert_eq!(
        call("join", vec![qexpr(&[1]), Value::number(2)]).to_string(),
        "Error: function 'join' passed incorrect type: expected q-expression, got number"
    );
}

#[test]
fn test_eval_builtin() {
    let body = Value::QExpr(args(vec![
        Value::symbol("+"),
        Value::number(1),
        Value::number(2),
    ]));
    assert_eq!(call("eval", vec![body]), Value::number(3));
    assert_eq!(call("eval", vec![Value::qexpr()]), Value::sexpr());
    assert!(matches!(
        call("eval", vec![Value::number(1)]),
        Value::Error(LispError::WrongType { function: "eval", .. })
    ));
    assert!(matches!(
        call("eval", vec![Value::qexpr(), Value::qexpr()]),
        Value::Error(LispError::WrongArgCount { function: "eval", .. })
    ));
}
