use super::*;
use crate::errors::division_by_zero;
use pretty_assertions::assert_eq;

fn numbers(ns: &[i64]) -> ExprList {
    ns.iter().copied().map(Value::Number).collect()
}

#[test]
fn test_constructors_and_type_names() {
    assert_eq!(Value::number(5).type_name(), "number");
    assert_eq!(Value::error(division_by_zero()).type_name(), "error");
    assert_eq!(Value::symbol("head").type_name(), "symbol");
    assert_eq!(Value::sexpr().type_name(), "s-expression");
    assert_eq!(Value::qexpr().type_name(), "q-expression");
}

#[test]
fn test_error_conversion() {
    let value: Value = division_by_zero().into();
    assert!(value.is_error());
    assert!(!Value::number(0).is_error());
}

#[test]
fn test_push_preserves_insertion_order() {
    let list = ExprList::new()
        .with(Value::number(1))
        .with(Value::symbol("x"))
        .with(Value::number(3));
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::symbol("x")));
}

#[test]
fn test_pop_shifts_left() {
    let mut list = numbers(&[1, 2, 3, 4]);
    assert_eq!(list.pop(1), Some(Value::number(2)));
    assert_eq!(list, numbers(&[1, 3, 4]));
    assert_eq!(list.pop(0), Some(Value::number(1)));
    assert_eq!(list, numbers(&[3, 4]));
}

#[test]
fn test_pop_out_of_range() {
    let mut list = numbers(&[1]);
    assert_eq!(list.pop(1), None);
    assert_eq!(list.len(), 1);
    assert_eq!(ExprList::new().pop(0), None);
}

#[test]
fn test_take_returns_only_the_child() {
    assert_eq!(numbers(&[7, 8, 9]).take(2), Some(Value::number(9)));
    assert_eq!(numbers(&[7]).take(3), None);
}

#[test]
fn test_split_first() {
    let Some((first, rest)) = numbers(&[1, 2, 3]).split_first() else {
        panic!("expected a first element");
    };
    assert_eq!(first, Value::number(1));
    assert_eq!(rest, numbers(&[2, 3]));
    assert!(ExprList::new().split_first().is_none());
}

#[test]
fn test_truncate_and_append() {
    let mut list = numbers(&[1, 2, 3]);
    list.truncate(1);
    assert_eq!(list, numbers(&[1]));
    list.truncate(5);
    assert_eq!(list.len(), 1);

    list.append(numbers(&[4, 5]));
    assert_eq!(list, numbers(&[1, 4, 5]));
}

#[test]
fn test_as_list_covers_both_list_variants() {
    let q = Value::QExpr(numbers(&[1, 2]));
    let s = Value::SExpr(numbers(&[1, 2]));
    assert_eq!(q.as_list(), s.as_list());
    assert_eq!(Value::number(1).as_list(), None);
}

#[test]
fn test_retagging_keeps_children() {
    let q = Value::QExpr(numbers(&[1, 2]));
    let Value::QExpr(children) = q else {
        panic!("expected q-expression");
    };
    let s = Value::SExpr(children);
    assert_eq!(s.as_list().map(ExprList::len), Some(2));
}

#[test]
fn test_into_iter_moves_children_in_order() {
    let values: Vec<Value> = numbers(&[3, 2, 1]).into_iter().collect();
    assert_eq!(values, vec![Value::number(3), Value::number(2), Value::number(1)]);
}

#[test]
fn test_deep_value_drops_without_overflow() {
    let mut value = Value::number(1);
    for depth in 0..300_000 {
        let list = ExprList::new().with(value).with(Value::number(depth));
        value = if depth % 2 == 0 {
            Value::SExpr(list)
        } else {
            Value::QExpr(list)
        };
    }
    drop(value);
}
