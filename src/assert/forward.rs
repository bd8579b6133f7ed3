// Assert: a reporter bound to an engine and rendering configuration, exposing
// every check as a method

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::panic::Location;

use super::diff::{get_value_diff, is_diffable};
use super::engine::{AssertionResult, ComparisonEngine, Inspected, JsonEngine};
use super::failure::{render_failure, report};
use super::html::{HtmlComparison, compare_html};
use super::inspect;
use crate::config::Config;
use crate::reporter::Reporter;

/// Error-like values accepted by `no_error`, `error` and `equal_error`
pub trait AsError {
    /// `None` means "no error"
    fn as_error(&self) -> Option<&dyn fmt::Display>;
}

impl<T, E: fmt::Display> AsError for Result<T, E> {
    fn as_error(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().err().map(|e| e as &dyn fmt::Display)
    }
}

impl<E: fmt::Display> AsError for Option<E> {
    fn as_error(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().map(|e| e as &dyn fmt::Display)
    }
}

pub struct Assert<'t, R: Reporter + ?Sized> {
    t: &'t mut R,
    engine: Box<dyn ComparisonEngine>,
    config: Config,
}

impl<'t, R: Reporter + ?Sized> Assert<'t, R> {
    pub fn new(t: &'t mut R) -> Self {
        Self::with_config(t, Config::default())
    }

    pub fn with_config(t: &'t mut R, config: Config) -> Self {
        Self {
            t,
            engine: Box::new(JsonEngine),
            config,
        }
    }

    /// Replace the comparison engine used by every check
    pub fn with_engine(mut self, engine: impl ComparisonEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reporter(&mut self) -> &mut R {
        &mut *self.t
    }

    /// Loose equality: numbers compare by value whatever their width.
    ///
    /// `equal(&123_i32, &123_u64)` holds, `equal(&123, &"123")` does not. Use
    /// [`Assert::strict_equal`] when the Rust type matters too.
    #[track_caller]
    pub fn equal<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: Serialize + ?Sized,
        A: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match (Inspected::of(expected), Inspected::of(actual)) {
            (Ok(expected), Ok(actual)) => {
                if self.engine.loose_equal(&expected.value, &actual.value) {
                    AssertionResult::Pass
                } else {
                    self.not_equal_failure(&expected, &actual, false)
                }
            }
            (Err(e), _) | (_, Err(e)) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("equal", location, result, msg_and_args)
    }

    /// Equality of both the Rust type and the value
    #[track_caller]
    pub fn strict_equal<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: Serialize + ?Sized,
        A: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match (Inspected::of(expected), Inspected::of(actual)) {
            (Ok(expected), Ok(actual)) => {
                if self.engine.strict_equal(&expected, &actual) {
                    AssertionResult::Pass
                } else {
                    self.not_equal_failure(&expected, &actual, true)
                }
            }
            (Err(e), _) | (_, Err(e)) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("strict_equal", location, result, msg_and_args)
    }

    /// Negation of [`Assert::equal`]
    #[track_caller]
    pub fn not_equal<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: Serialize + ?Sized,
        A: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match (Inspected::of(expected), Inspected::of(actual)) {
            (Ok(expected), Ok(actual)) => {
                let holds = !self.engine.loose_equal(&expected.value, &actual.value);
                AssertionResult::from_bool(holds, || {
                    format!("Should not be: {}", self.render(&actual.value))
                })
            }
            (Err(e), _) | (_, Err(e)) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("not_equal", location, result, msg_and_args)
    }

    /// Negation of [`Assert::strict_equal`]
    #[track_caller]
    pub fn not_strict_equal<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: Serialize + ?Sized,
        A: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match (Inspected::of(expected), Inspected::of(actual)) {
            (Ok(expected), Ok(actual)) => {
                AssertionResult::from_bool(!self.engine.strict_equal(&expected, &actual), || {
                    format!("Should not be: {}", self.render_typed(&actual))
                })
            }
            (Err(e), _) | (_, Err(e)) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("not_strict_equal", location, result, msg_and_args)
    }

    /// Both references point at the same storage.
    ///
    /// Zero-sized values have no storage of their own, so passing one is a
    /// usage error.
    #[track_caller]
    pub fn same<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: fmt::Debug + ?Sized,
        A: fmt::Debug + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match identity(expected, actual) {
            Ok(true) => AssertionResult::Pass,
            Ok(false) => AssertionResult::fail(format!(
                "Not same:\nexpected: {:p} {:?}\nactual  : {:p} {:?}",
                std::ptr::from_ref(expected).cast::<()>(),
                expected,
                std::ptr::from_ref(actual).cast::<()>(),
                actual
            )),
            Err(usage) => usage,
        };

        self.conclude("same", location, result, msg_and_args)
    }

    /// The references point at different storage, even if the values are equal
    #[track_caller]
    pub fn not_same<E, A>(
        &mut self,
        expected: &E,
        actual: &A,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        E: fmt::Debug + ?Sized,
        A: fmt::Debug + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match identity(expected, actual) {
            Ok(false) => AssertionResult::Pass,
            Ok(true) => AssertionResult::fail(format!(
                "Expected and actual point to the same object: {:p} {:?}",
                std::ptr::from_ref(expected).cast::<()>(),
                expected
            )),
            Err(usage) => usage,
        };

        self.conclude("not_same", location, result, msg_and_args)
    }

    /// `container` holds `item`: a substring of a string, an element of a
    /// list or a key of a map.
    #[track_caller]
    pub fn contains<C, I>(
        &mut self,
        container: &C,
        item: &I,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        C: Serialize + ?Sized,
        I: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = self.containment(container, item, true);
        self.conclude("contains", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn not_contains<C, I>(
        &mut self,
        container: &C,
        item: &I,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        C: Serialize + ?Sized,
        I: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = self.containment(container, item, false);
        self.conclude("not_contains", location, result, msg_and_args)
    }

    fn containment<C, I>(&self, container: &C, item: &I, want: bool) -> AssertionResult
    where
        C: Serialize + ?Sized,
        I: Serialize + ?Sized,
    {
        let (container, item) = match (Inspected::of(container), Inspected::of(item)) {
            (Ok(container), Ok(item)) => (container.value, item.value),
            (Err(e), _) | (_, Err(e)) => return AssertionResult::Error(e.to_string()),
        };

        match self.engine.contains(&container, &item) {
            None => AssertionResult::Error(format!(
                "{} does not support containment checks",
                self.render(&container)
            )),
            Some(found) if found == want => AssertionResult::Pass,
            Some(_) if want => AssertionResult::fail(format!(
                "{} does not contain {}",
                self.render(&container),
                self.render(&item)
            )),
            Some(_) => AssertionResult::fail(format!(
                "{} should not contain {}",
                self.render(&container),
                self.render(&item)
            )),
        }
    }

    /// Both lists hold the same elements, ignoring order.
    ///
    /// Duplicates must appear the same number of times on both sides:
    /// `[1, 3, 2, 3]` matches `[1, 3, 3, 2]` but not `[1, 3, 2]`.
    #[track_caller]
    pub fn elements_match<L1, L2>(
        &mut self,
        list_a: &L1,
        list_b: &L2,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        L1: Serialize + ?Sized,
        L2: Serialize + ?Sized,
    {
        let location = Location::caller();
        self.t.helper();

        let result = match (Inspected::of(list_a), Inspected::of(list_b)) {
            (Ok(a), Ok(b)) => match self.engine.elements_match(&a.value, &b.value) {
                None => {
                    let offender = if a.value.is_array() { &b } else { &a };
                    AssertionResult::Error(format!(
                        "{} has an unsupported type {}, expected a list",
                        self.render(&offender.value),
                        offender.type_name
                    ))
                }
                Some(unmatched) if unmatched.is_empty() => AssertionResult::Pass,
                Some(unmatched) => AssertionResult::fail(format!(
                    "elements differ\n\nextra elements in list A:\n{}\n\n\
                     extra elements in list B:\n{}\n\nlistA:\n{}\n\nlistB:\n{}",
                    self.render(&Value::Array(unmatched.extra_a)),
                    self.render(&Value::Array(unmatched.extra_b)),
                    self.render(&a.value),
                    self.render(&b.value)
                )),
            },
            (Err(e), _) | (_, Err(e)) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("elements_match", location, result, msg_and_args)
    }

    /// `f` panics. It is called exactly once and its panic never escapes.
    #[track_caller]
    pub fn panics<F: FnOnce()>(&mut self, f: F, msg_and_args: &[&dyn fmt::Display]) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match self.engine.aborts(Box::new(f)) {
            Some(_) => AssertionResult::Pass,
            None => AssertionResult::fail("func should panic\n\tPanic value:\t<none>"),
        };

        self.conclude("panics", location, result, msg_and_args)
    }

    /// `f` panics with exactly `expected` as its message
    #[track_caller]
    pub fn panics_with_message<F: FnOnce()>(
        &mut self,
        expected: &str,
        f: F,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match self.engine.aborts(Box::new(f)) {
            Some(message) if message == expected => AssertionResult::Pass,
            Some(message) => AssertionResult::fail(format!(
                "func should panic with message:\t{:?}\n\tPanic value:\t{:?}",
                expected, message
            )),
            None => AssertionResult::fail(format!(
                "func should panic with message:\t{:?}\n\tPanic value:\t<none>",
                expected
            )),
        };

        self.conclude("panics_with_message", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn not_panics<F: FnOnce()>(&mut self, f: F, msg_and_args: &[&dyn fmt::Display]) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match self.engine.aborts(Box::new(f)) {
            None => AssertionResult::Pass,
            Some(message) => AssertionResult::fail(format!(
                "func should not panic\n\tPanic value:\t{:?}",
                message
            )),
        };

        self.conclude("not_panics", location, result, msg_and_args)
    }

    /// The two instants are at most `delta` apart, in either direction
    #[track_caller]
    pub fn within_duration<Tz1, Tz2>(
        &mut self,
        expected: &DateTime<Tz1>,
        actual: &DateTime<Tz2>,
        delta: TimeDelta,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
        Tz1::Offset: fmt::Display,
        Tz2::Offset: fmt::Display,
    {
        let location = Location::caller();
        self.t.helper();

        let difference = actual.clone().signed_duration_since(expected.clone());
        let within = difference >= -delta && difference <= delta;
        let result = AssertionResult::from_bool(within, || {
            format!(
                "Max difference between {} and {} allowed is {}, but difference was {}",
                expected, actual, delta, difference
            )
        });

        self.conclude("within_duration", location, result, msg_and_args)
    }

    /// `err` holds no error
    #[track_caller]
    pub fn no_error<E: AsError + ?Sized>(
        &mut self,
        err: &E,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match err.as_error() {
            None => AssertionResult::Pass,
            Some(e) => AssertionResult::fail(format!("Received unexpected error:\n{}", e)),
        };

        self.conclude("no_error", location, result, msg_and_args)
    }

    /// `err` holds an error
    #[track_caller]
    pub fn error<E: AsError + ?Sized>(
        &mut self,
        err: &E,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = AssertionResult::from_bool(err.as_error().is_some(), || {
            "An error is expected but got none.".to_string()
        });

        self.conclude("error", location, result, msg_and_args)
    }

    /// `err` holds an error whose text is exactly `expected`
    #[track_caller]
    pub fn equal_error<E: AsError + ?Sized>(
        &mut self,
        err: &E,
        expected: &str,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match err.as_error() {
            None => AssertionResult::fail(format!(
                "An error is expected but got none.\nExpected error: {:?}",
                expected
            )),
            Some(e) => {
                let actual = e.to_string();
                if actual == expected {
                    AssertionResult::Pass
                } else {
                    AssertionResult::fail_with_diff(
                        "Error message not equal:",
                        format!("{:?}", expected),
                        format!("{:?}", actual),
                    )
                }
            }
        };

        self.conclude("equal_error", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn true_(&mut self, value: bool, msg_and_args: &[&dyn fmt::Display]) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = AssertionResult::from_bool(value, || "Should be true".to_string());
        self.conclude("true", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn false_(&mut self, value: bool, msg_and_args: &[&dyn fmt::Display]) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = AssertionResult::from_bool(!value, || "Should be false".to_string());
        self.conclude("false", location, result, msg_and_args)
    }

    /// `value` is nil: `None` or `()`. An empty `Vec` is not nil.
    #[track_caller]
    pub fn nil<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match Inspected::of(value) {
            Ok(inspected) => AssertionResult::from_bool(self.engine.is_nil(&inspected.value), || {
                format!("Expected nil, but got: {}", self.render(&inspected.value))
            }),
            Err(e) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("nil", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn not_nil<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match Inspected::of(value) {
            Ok(inspected) => AssertionResult::from_bool(!self.engine.is_nil(&inspected.value), || {
                "Expected value not to be nil.".to_string()
            }),
            Err(e) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("not_nil", location, result, msg_and_args)
    }

    /// `value` is nil, zero, `false`, `""` or an empty list or map
    #[track_caller]
    pub fn empty<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match Inspected::of(value) {
            Ok(inspected) => AssertionResult::from_bool(self.engine.is_empty(&inspected.value), || {
                format!("Should be empty, but was {}", self.render(&inspected.value))
            }),
            Err(e) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("empty", location, result, msg_and_args)
    }

    #[track_caller]
    pub fn not_empty<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match Inspected::of(value) {
            Ok(inspected) => AssertionResult::from_bool(!self.engine.is_empty(&inspected.value), || {
                format!("Should NOT be empty, but was {}", self.render(&inspected.value))
            }),
            Err(e) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("not_empty", location, result, msg_and_args)
    }

    /// `value` has exactly `length` bytes, elements or entries
    #[track_caller]
    pub fn len<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        length: usize,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        let location = Location::caller();
        self.t.helper();

        let result = match Inspected::of(value) {
            Ok(inspected) => match self.engine.length_of(&inspected.value) {
                None => AssertionResult::Error(format!(
                    "{} has no length",
                    self.render(&inspected.value)
                )),
                Some(actual) => AssertionResult::from_bool(actual == length, || {
                    format!(
                        "{} should have {} item(s), but has {}",
                        self.render(&inspected.value),
                        length,
                        actual
                    )
                }),
            },
            Err(e) => AssertionResult::Error(e.to_string()),
        };

        self.conclude("len", location, result, msg_and_args)
    }

    /// Report `failure` unconditionally; always returns `false`
    #[track_caller]
    pub fn fail(&mut self, failure: &str, msg_and_args: &[&dyn fmt::Display]) -> bool {
        let location = Location::caller();
        self.t.helper();

        self.conclude("fail", location, AssertionResult::fail(failure), msg_and_args)
    }

    /// Two HTML fragments are equal once whitespace between tags is ignored.
    ///
    /// On mismatch the trimmed expected fragment and the normalized actual
    /// fragment are reported.
    #[track_caller]
    pub fn equal_html(&mut self, expected: &str, actual: &str) {
        self.t.helper();

        if let HtmlComparison::Different { expected, actual } = compare_html(expected, actual) {
            tracing::debug!(check = "equal_html", location = %Location::caller(), "check failed");
            self.t
                .errorf(format_args!("\nexpected:\n{}\nactual   :\n{}", expected, actual));
        }
    }

    fn not_equal_failure(
        &self,
        expected: &Inspected,
        actual: &Inspected,
        typed: bool,
    ) -> AssertionResult {
        let (expected_str, mut actual_str) = if typed || expected.value == actual.value {
            (self.render_typed(expected), self.render_typed(actual))
        } else {
            (self.render(&expected.value), self.render(&actual.value))
        };

        if self.config.output.diff && is_diffable(&expected.value, &actual.value) {
            actual_str.push_str("\n\n");
            actual_str.push_str(&get_value_diff(
                &expected.value,
                &actual.value,
                self.config.output.color,
            ));
        }

        AssertionResult::fail_with_diff("Not equal:", expected_str, actual_str)
    }

    fn render(&self, value: &Value) -> String {
        self.config.truncate(inspect::render(value))
    }

    fn render_typed(&self, inspected: &Inspected) -> String {
        format!("{}({})", inspected.type_name, self.render(&inspected.value))
    }

    fn conclude(
        &mut self,
        check: &str,
        location: &Location<'_>,
        result: AssertionResult,
        msg_and_args: &[&dyn fmt::Display],
    ) -> bool {
        match render_failure(&result) {
            None => true,
            Some(failure) => {
                report(&mut *self.t, check, location, &failure, msg_and_args);
                false
            }
        }
    }
}

/// `Ok(true)` when both references share an address, a type and a size.
///
/// The size check tells apart slices that start at the same element.
fn identity<E, A>(expected: &E, actual: &A) -> Result<bool, AssertionResult>
where
    E: ?Sized,
    A: ?Sized,
{
    if std::mem::size_of_val(expected) == 0 || std::mem::size_of_val(actual) == 0 {
        return Err(AssertionResult::Error(
            "Both arguments must refer to values that occupy storage; \
             zero-sized values have no identity"
                .to_string(),
        ));
    }

    if std::any::type_name::<E>() != std::any::type_name::<A>()
        || std::mem::size_of_val(expected) != std::mem::size_of_val(actual)
    {
        return Ok(false);
    }

    Ok(std::ptr::eq(
        std::ptr::from_ref(expected).cast::<()>(),
        std::ptr::from_ref(actual).cast::<()>(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::engine::Unmatched;
    use crate::reporter::Recorder;
    use serde_json::json;

    #[test]
    fn test_with_config_disables_diff() {
        let mut recorder = Recorder::new();
        let mut config = Config::default();
        config.output.diff = false;

        let mut check = Assert::with_config(&mut recorder, config);
        assert!(!check.equal(&json!({"a": 1}), &json!({"a": 2}), &[]));

        assert!(!recorder.last_failure().unwrap().contains("Diff"));
    }

    #[test]
    fn test_diff_appended_for_containers() {
        let mut recorder = Recorder::new();
        assert!(!Assert::new(&mut recorder).equal(&vec![1, 2], &vec![1, 3], &[]));
        assert!(recorder.last_failure().unwrap().contains("Diff (Expected - / Actual +):"));
    }

    #[test]
    fn test_truncated_values() {
        let mut recorder = Recorder::new();
        let mut config = Config::default();
        config.output.max_value_len = 4;

        Assert::with_config(&mut recorder, config).nil(&"a long string value", &[]);
        assert!(recorder.last_failure().unwrap().contains("\"a l...<truncated>"));
    }

    #[test]
    fn test_same_type_mismatch_is_not_same() {
        let value = 5u32;
        let as_i32 = 5i32;
        assert_eq!(identity(&value, &value), Ok(true));
        assert_eq!(identity(&value, &as_i32), Ok(false));
        assert!(identity(&(), &()).is_err());
    }

    #[test]
    fn test_identity_of_overlapping_slices() {
        let values = [1, 2, 3];
        assert_eq!(identity(&values[..], &values[..]), Ok(true));
        assert_eq!(identity(&values[..], &values[..1]), Ok(false));
        assert_eq!(identity(&values[1..], &values[1..2]), Ok(false));
        assert_eq!(identity("abc", &"abc"[..2]), Ok(false));
    }

    #[test]
    fn test_custom_engine() {
        struct NeverEqual;

        impl ComparisonEngine for NeverEqual {
            fn loose_equal(&self, _: &Value, _: &Value) -> bool {
                false
            }
            fn strict_equal(&self, _: &Inspected, _: &Inspected) -> bool {
                false
            }
            fn contains(&self, _: &Value, _: &Value) -> Option<bool> {
                None
            }
            fn elements_match(&self, _: &Value, _: &Value) -> Option<Unmatched> {
                None
            }
            fn is_nil(&self, _: &Value) -> bool {
                false
            }
            fn is_empty(&self, _: &Value) -> bool {
                false
            }
            fn length_of(&self, _: &Value) -> Option<usize> {
                None
            }
            fn aborts(&self, f: Box<dyn FnOnce() + '_>) -> Option<String> {
                f();
                None
            }
        }

        let mut recorder = Recorder::new();
        let mut check = Assert::new(&mut recorder).with_engine(NeverEqual);
        assert!(!check.equal(&1, &1, &[]));
        assert!(!check.len(&vec![1], 1, &[]));
        assert_eq!(recorder.failures().len(), 2);
    }
}
