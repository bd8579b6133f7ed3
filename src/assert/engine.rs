// Comparison engine: the primitive operations every check is built from

use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::comparator::ValueComparator;
use super::inspect::{self, Special, special};
use crate::error::{Error, Result};

/// Assertion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Pass,
    Fail {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// The check was used with arguments it cannot handle
    Error(String),
}

impl AssertionResult {
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn fail_with_diff(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Fail {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    pub fn from_bool(holds: bool, message: impl FnOnce() -> String) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::fail(message())
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// A value captured for comparison, together with the name of its Rust type
#[derive(Debug, Clone, PartialEq)]
pub struct Inspected {
    pub type_name: &'static str,
    pub value: Value,
}

impl Inspected {
    pub fn of<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let type_name = std::any::type_name::<T>();
        let value =
            inspect::to_value(value).map_err(|source| Error::Inspect { type_name, source })?;
        Ok(Self { type_name, value })
    }
}

/// Elements left over after an unordered comparison
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unmatched {
    /// In the first list but not the second
    pub extra_a: Vec<Value>,
    /// In the second list but not the first
    pub extra_b: Vec<Value>,
}

impl Unmatched {
    pub fn is_empty(&self) -> bool {
        self.extra_a.is_empty() && self.extra_b.is_empty()
    }
}

/// Primitive comparison operations.
///
/// Checks only name and compose these; swapping the engine changes what
/// "equal", "empty" or "contains" mean for every check at once.
pub trait ComparisonEngine {
    /// Equality ignoring numeric width but not the kind of value
    fn loose_equal(&self, expected: &Value, actual: &Value) -> bool;

    /// Equality of both the Rust type and the value
    fn strict_equal(&self, expected: &Inspected, actual: &Inspected) -> bool;

    /// `None` when `container` does not support containment
    fn contains(&self, container: &Value, item: &Value) -> Option<bool>;

    /// `None` when either side is not a list
    fn elements_match(&self, list_a: &Value, list_b: &Value) -> Option<Unmatched>;

    /// Only `None` and `()` are nil
    fn is_nil(&self, value: &Value) -> bool;

    /// Zero value of its kind; looks through `Some`
    fn is_empty(&self, value: &Value) -> bool;

    /// `None` when the value has no length
    fn length_of(&self, value: &Value) -> Option<usize>;

    /// Invoke `f` once; return the panic message if it panicked
    fn aborts(&self, f: Box<dyn FnOnce() + '_>) -> Option<String>;
}

/// Default engine over `serde_json::Value`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEngine;

impl ComparisonEngine for JsonEngine {
    fn loose_equal(&self, expected: &Value, actual: &Value) -> bool {
        ValueComparator::loose_equal(expected, actual)
    }

    fn strict_equal(&self, expected: &Inspected, actual: &Inspected) -> bool {
        expected.type_name == actual.type_name && expected.value == actual.value
    }

    fn contains(&self, container: &Value, item: &Value) -> Option<bool> {
        match special(container) {
            Some(Special::Some(inner)) => return self.contains(inner, item),
            Some(_) => return None,
            None => {}
        }

        match container {
            Value::String(s) => Some(match item {
                Value::String(sub) => s.contains(sub.as_str()),
                _ => false,
            }),
            Value::Array(items) => Some(
                items
                    .iter()
                    .any(|candidate| ValueComparator::loose_equal(candidate, item)),
            ),
            Value::Object(map) => Some(map.contains_key(&inspect::key_text(item))),
            _ => None,
        }
    }

    fn elements_match(&self, list_a: &Value, list_b: &Value) -> Option<Unmatched> {
        match (list_a, list_b) {
            (Value::Array(a), Value::Array(b)) => Some(ValueComparator::unordered_diff(a, b)),
            _ => None,
        }
    }

    fn is_nil(&self, value: &Value) -> bool {
        value.is_null()
    }

    fn is_empty(&self, value: &Value) -> bool {
        match special(value) {
            Some(Special::Some(inner)) => return self.is_empty(inner),
            Some(Special::Unit(_)) => return true,
            Some(Special::Float(_) | Special::Int(_)) => return false,
            None => {}
        }

        match value {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(values) => values.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }

    fn length_of(&self, value: &Value) -> Option<usize> {
        match special(value) {
            Some(Special::Some(inner)) => return self.length_of(inner),
            Some(_) => return None,
            None => {}
        }

        match value {
            Value::String(s) => Some(s.len()),
            Value::Array(arr) => Some(arr.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    fn aborts(&self, f: Box<dyn FnOnce() + '_>) -> Option<String> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(()) => None,
            Err(payload) => Some(panic_message(payload.as_ref())),
        }
    }
}

/// Text carried by a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inspect_keeps_type_name() {
        let inspected = Inspected::of(&123i32).unwrap();
        assert_eq!(inspected.type_name, "i32");
        assert_eq!(inspected.value, json!(123));
    }

    #[test]
    fn test_strict_equal_requires_same_type() {
        let engine = JsonEngine;
        let a = Inspected::of(&123i32).unwrap();
        let b = Inspected::of(&123i64).unwrap();
        let c = Inspected::of(&123i32).unwrap();

        assert!(!engine.strict_equal(&a, &b));
        assert!(engine.strict_equal(&a, &c));
        assert!(engine.loose_equal(&a.value, &b.value));
    }

    #[test]
    fn test_contains_by_container_kind() {
        let engine = JsonEngine;
        assert_eq!(engine.contains(&json!("Hello World"), &json!("World")), Some(true));
        assert_eq!(engine.contains(&json!("Hello World"), &json!("Earth")), Some(false));
        assert_eq!(engine.contains(&json!("Hello 1"), &json!(1)), Some(false));
        assert_eq!(engine.contains(&json!(["Hello", "World"]), &json!("World")), Some(true));
        assert_eq!(engine.contains(&json!([1, 2, 3]), &json!(2.0)), Some(true));
        assert_eq!(engine.contains(&json!({"Hello": "World"}), &json!("Hello")), Some(true));
        assert_eq!(engine.contains(&json!({"Hello": "World"}), &json!("World")), Some(false));
        assert_eq!(engine.contains(&json!({"1": "one"}), &json!(1)), Some(true));
        assert_eq!(engine.contains(&json!(42), &json!(4)), None);
        assert_eq!(engine.contains(&Value::Null, &json!(4)), None);
    }

    #[test]
    fn test_elements_match_requires_lists() {
        let engine = JsonEngine;
        assert!(engine.elements_match(&json!("abc"), &json!([1])).is_none());
        let unmatched = engine.elements_match(&json!([1, 2]), &json!([2, 1])).unwrap();
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_nil_and_empty() {
        let engine = JsonEngine;
        assert!(engine.is_nil(&Value::Null));
        assert!(!engine.is_nil(&json!([])));

        let empties = [
            json!(null),
            json!(""),
            json!(false),
            json!(0),
            json!(0.0),
            json!([]),
            json!({}),
        ];
        for empty in empties {
            assert!(engine.is_empty(&empty), "{} should be empty", empty);
        }
        for full in [json!("x"), json!(true), json!(1), json!(-0.5), json!([0]), json!({"a": 0})] {
            assert!(!engine.is_empty(&full), "{} should not be empty", full);
        }
    }

    #[test]
    fn test_length_of() {
        let engine = JsonEngine;
        assert_eq!(engine.length_of(&json!("abc")), Some(3));
        assert_eq!(engine.length_of(&json!([1, 2])), Some(2));
        assert_eq!(engine.length_of(&json!({"a": 1})), Some(1));
        assert_eq!(engine.length_of(&json!(5)), None);
        assert_eq!(engine.length_of(&Value::Null), None);
    }

    #[test]
    fn test_tagged_values_keep_their_kind() {
        let engine = JsonEngine;
        let inf = Inspected::of(&f64::INFINITY).unwrap();
        let neg_inf = Inspected::of(&f64::NEG_INFINITY).unwrap();
        let nan = Inspected::of(&f64::NAN).unwrap();

        assert!(!engine.loose_equal(&inf.value, &neg_inf.value));
        assert!(!engine.strict_equal(&inf, &neg_inf));
        assert!(engine.strict_equal(&nan, &Inspected::of(&f64::NAN).unwrap()));
        assert!(!engine.is_nil(&nan.value));
        assert!(!engine.is_empty(&inf.value));
        assert_eq!(engine.length_of(&inf.value), None);
        assert_eq!(engine.contains(&inf.value, &json!("inf")), None);
    }

    #[test]
    fn test_option_is_looked_through_for_measuring() {
        let engine = JsonEngine;
        let some_list = Inspected::of(&Some(vec![1, 2])).unwrap().value;
        let some_zero = Inspected::of(&Some(0)).unwrap().value;

        assert!(!engine.loose_equal(&some_list, &json!([1, 2])));
        assert_eq!(engine.length_of(&some_list), Some(2));
        assert_eq!(engine.contains(&some_list, &json!(2)), Some(true));
        assert!(engine.is_empty(&some_zero));
        assert!(!engine.is_nil(&some_zero));
    }

    #[test]
    fn test_contains_non_string_keys() {
        use std::collections::HashMap;

        let engine = JsonEngine;
        let map = Inspected::of(&HashMap::from([((1, 2), "pair")])).unwrap().value;
        let key = Inspected::of(&(1, 2)).unwrap().value;

        assert_eq!(engine.contains(&map, &key), Some(true));
        assert_eq!(engine.contains(&map, &json!([2, 1])), Some(false));
        assert_eq!(engine.length_of(&map), Some(1));
    }

    fn run_aborts<F: FnOnce()>(engine: &JsonEngine, f: F) -> Option<String> {
        engine.aborts(Box::new(f))
    }

    #[test]
    fn test_aborts_contains_panic() {
        let engine = JsonEngine;
        let mut calls = 0;
        let outcome = run_aborts(&engine, || {
            calls += 1;
            panic!("kaboom");
        });
        assert_eq!(outcome.as_deref(), Some("kaboom"));
        assert_eq!(calls, 1);

        let formatted = run_aborts(&engine, || panic!("code {}", 7));
        assert_eq!(formatted.as_deref(), Some("code 7"));

        assert_eq!(run_aborts(&engine, || {}), None);
    }
}
