use serde_json::{Number, Value};
use std::collections::{HashMap, HashSet};

use super::engine::Unmatched;

pub struct ValueComparator;

impl ValueComparator {
    /// Structural equality that ignores how a number is represented.
    ///
    /// `123_i32`, `123_u64` and `123.0_f64` are all equal; `123` and `"123"`
    /// are not.
    pub fn loose_equal(expected: &Value, actual: &Value) -> bool {
        match (expected, actual) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(e), Value::Bool(a)) => e == a,
            (Value::String(e), Value::String(a)) => e == a,
            (Value::Number(e), Value::Number(a)) => Self::numbers_equal(e, a),
            (Value::Array(e), Value::Array(a)) => {
                e.len() == a.len()
                    && e.iter()
                        .zip(a.iter())
                        .all(|(e, a)| Self::loose_equal(e, a))
            }
            (Value::Object(e), Value::Object(a)) => {
                e.len() == a.len()
                    && e.iter().all(|(key, e_val)| {
                        a.get(key)
                            .is_some_and(|a_val| Self::loose_equal(e_val, a_val))
                    })
            }
            _ => false,
        }
    }

    fn numbers_equal(expected: &Number, actual: &Number) -> bool {
        if let (Some(e), Some(a)) = (as_integer(expected), as_integer(actual)) {
            return e == a;
        }

        match (expected.as_f64(), actual.as_f64()) {
            (Some(e), Some(a)) => e == a,
            _ => false,
        }
    }

    /// Multiset difference of two lists, matching count for count
    pub fn unordered_diff(list_a: &[Value], list_b: &[Value]) -> Unmatched {
        let mut matched_b = HashSet::new();
        let mut hash_to_indices: HashMap<u64, Vec<usize>> = HashMap::new();

        for (i, item) in list_b.iter().enumerate() {
            hash_to_indices
                .entry(Self::hash_value(item))
                .or_default()
                .push(i);
        }

        let mut extra_a = Vec::new();
        for item in list_a {
            let found = hash_to_indices
                .get(&Self::hash_value(item))
                .and_then(|indices| {
                    indices.iter().copied().find(|idx| {
                        !matched_b.contains(idx) && Self::loose_equal(item, &list_b[*idx])
                    })
                });

            match found {
                Some(idx) => {
                    matched_b.insert(idx);
                }
                None => extra_a.push(item.clone()),
            }
        }

        let extra_b = list_b
            .iter()
            .enumerate()
            .filter(|(i, _)| !matched_b.contains(i))
            .map(|(_, item)| item.clone())
            .collect();

        Unmatched { extra_a, extra_b }
    }

    /// Hash a value consistently with `loose_equal`: values that compare equal
    /// hash equal, whatever their key order or number representation.
    fn hash_value(value: &Value) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();

        match value {
            Value::Null => 0u8.hash(&mut hasher),
            Value::Bool(b) => (1u8, b).hash(&mut hasher),
            Value::Number(n) => {
                // -0.0 and 0.0 compare equal
                let f = n.as_f64().unwrap_or_default();
                let bits = if f == 0.0 { 0 } else { f.to_bits() };
                (2u8, bits).hash(&mut hasher)
            }
            Value::String(s) => (3u8, s).hash(&mut hasher),
            Value::Array(arr) => {
                (4u8, arr.len()).hash(&mut hasher);
                for item in arr {
                    Self::hash_value(item).hash(&mut hasher);
                }
            }
            Value::Object(obj) => {
                (5u8, obj.len()).hash(&mut hasher);
                let mut keys: Vec<_> = obj.keys().collect();
                keys.sort();
                for key in keys {
                    key.hash(&mut hasher);
                    Self::hash_value(&obj[key]).hash(&mut hasher);
                }
            }
        }

        hasher.finish()
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_equal_numbers_across_widths() {
        assert!(ValueComparator::loose_equal(&json!(123i32), &json!(123i64)));
        assert!(ValueComparator::loose_equal(&json!(100u64), &json!(100i8)));
        assert!(ValueComparator::loose_equal(&json!(60), &json!(60.0)));
        assert!(ValueComparator::loose_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!ValueComparator::loose_equal(&json!(u64::MAX), &json!(i64::MAX)));
        assert!(!ValueComparator::loose_equal(&json!(-1), &json!(1u8)));
        assert!(!ValueComparator::loose_equal(&json!(0.5), &json!(0.25)));
    }

    #[test]
    fn test_loose_equal_respects_kind() {
        assert!(!ValueComparator::loose_equal(&json!(123), &json!("123")));
        assert!(!ValueComparator::loose_equal(&json!(0), &json!(false)));
        assert!(!ValueComparator::loose_equal(&json!(null), &json!([])));
    }

    #[test]
    fn test_loose_equal_nested() {
        let expected = json!({"user": {"name": "test", "ids": [1, 2]}});
        let actual = json!({"user": {"ids": [1.0, 2], "name": "test"}});
        assert!(ValueComparator::loose_equal(&expected, &actual));

        let extra_key = json!({"user": {"ids": [1, 2], "name": "test", "age": 3}});
        assert!(!ValueComparator::loose_equal(&expected, &extra_key));
        assert!(!ValueComparator::loose_equal(&extra_key, &expected));

        assert!(!ValueComparator::loose_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!ValueComparator::loose_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_unordered_diff_duplicates() {
        let a = [json!(1), json!(3), json!(2), json!(3)];
        let b = [json!(1), json!(3), json!(3), json!(2)];
        assert!(ValueComparator::unordered_diff(&a, &b).is_empty());

        let b = [json!(1), json!(3), json!(2), json!(2)];
        let unmatched = ValueComparator::unordered_diff(&a, &b);
        assert_eq!(unmatched.extra_a, vec![json!(3)]);
        assert_eq!(unmatched.extra_b, vec![json!(2)]);
    }

    #[test]
    fn test_unordered_diff_lengths() {
        let a = [json!(1), json!(2), json!(3)];
        let b = [json!(1), json!(2)];
        let unmatched = ValueComparator::unordered_diff(&a, &b);
        assert_eq!(unmatched.extra_a, vec![json!(3)]);
        assert!(unmatched.extra_b.is_empty());
    }

    #[test]
    fn test_unordered_diff_objects() {
        let a = [json!({"id": 3, "name": "c"}), json!({"id": 1, "name": "a"})];
        let b = [json!({"name": "a", "id": 1}), json!({"name": "c", "id": 3.0})];
        assert!(ValueComparator::unordered_diff(&a, &b).is_empty());
    }

    #[test]
    fn test_hash_value_consistency() {
        let value1 = json!({"id": 1, "name": "test"});
        let value2 = json!({"name": "test", "id": 1.0});
        assert_eq!(
            ValueComparator::hash_value(&value1),
            ValueComparator::hash_value(&value2)
        );
        assert_eq!(
            ValueComparator::hash_value(&json!(0.0)),
            ValueComparator::hash_value(&json!(-0.0))
        );
    }
}
