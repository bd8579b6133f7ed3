// Free-function checks, each a shorthand for the `Assert` method of the same
// name with the default engine and configuration

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::Serialize;
use std::fmt;

use super::forward::{AsError, Assert};
use crate::reporter::Reporter;

/// Loose equality: numbers compare by value whatever their width.
///
/// ```
/// use assertkit::{Recorder, assert};
///
/// let mut t = Recorder::new();
/// assert!(assert::equal(&mut t, &123, &123_u64, &[]));
/// assert!(!assert::equal(&mut t, &123, &"123", &[]));
/// ```
#[track_caller]
pub fn equal<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    Assert::new(t).equal(expected, actual, msg_and_args)
}

/// Equality of both the Rust type and the value.
///
/// ```
/// use assertkit::{Recorder, assert};
///
/// let mut t = Recorder::new();
/// assert!(assert::strict_equal(&mut t, &123, &123, &[]));
/// assert!(!assert::strict_equal(&mut t, &123, &123_i64, &[]));
/// ```
#[track_caller]
pub fn strict_equal<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    Assert::new(t).strict_equal(expected, actual, msg_and_args)
}

#[track_caller]
pub fn not_equal<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    Assert::new(t).not_equal(expected, actual, msg_and_args)
}

#[track_caller]
pub fn not_strict_equal<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    Assert::new(t).not_strict_equal(expected, actual, msg_and_args)
}

/// Both references point at the same storage
#[track_caller]
pub fn same<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: fmt::Debug + ?Sized,
    A: fmt::Debug + ?Sized,
{
    Assert::new(t).same(expected, actual, msg_and_args)
}

#[track_caller]
pub fn not_same<R, E, A>(
    t: &mut R,
    expected: &E,
    actual: &A,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: fmt::Debug + ?Sized,
    A: fmt::Debug + ?Sized,
{
    Assert::new(t).not_same(expected, actual, msg_and_args)
}

/// Substring of a string, element of a list or key of a map.
///
/// ```
/// use assertkit::{Recorder, assert};
/// use std::collections::HashMap;
///
/// let mut t = Recorder::new();
/// assert!(assert::contains(&mut t, "Hello World", "World", &[]));
/// assert!(assert::contains(&mut t, &["Hello", "World"], "World", &[]));
/// assert!(assert::contains(&mut t, &HashMap::from([("Hello", "World")]), "Hello", &[]));
/// ```
#[track_caller]
pub fn contains<R, C, I>(
    t: &mut R,
    container: &C,
    item: &I,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    C: Serialize + ?Sized,
    I: Serialize + ?Sized,
{
    Assert::new(t).contains(container, item, msg_and_args)
}

#[track_caller]
pub fn not_contains<R, C, I>(
    t: &mut R,
    container: &C,
    item: &I,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    C: Serialize + ?Sized,
    I: Serialize + ?Sized,
{
    Assert::new(t).not_contains(container, item, msg_and_args)
}

/// Same elements in any order, duplicates counted.
///
/// ```
/// use assertkit::{Recorder, assert};
///
/// let mut t = Recorder::new();
/// assert!(assert::elements_match(&mut t, &[1, 3, 2, 3], &[1, 3, 3, 2], &[]));
/// ```
#[track_caller]
pub fn elements_match<R, L1, L2>(
    t: &mut R,
    list_a: &L1,
    list_b: &L2,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    L1: Serialize + ?Sized,
    L2: Serialize + ?Sized,
{
    Assert::new(t).elements_match(list_a, list_b, msg_and_args)
}

#[track_caller]
pub fn panics<R, F>(t: &mut R, f: F, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    Assert::new(t).panics(f, msg_and_args)
}

#[track_caller]
pub fn panics_with_message<R, F>(
    t: &mut R,
    expected: &str,
    f: F,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    Assert::new(t).panics_with_message(expected, f, msg_and_args)
}

#[track_caller]
pub fn not_panics<R, F>(t: &mut R, f: F, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    Assert::new(t).not_panics(f, msg_and_args)
}

/// ```
/// use assertkit::{Recorder, assert};
/// use chrono::{TimeDelta, Utc};
///
/// let mut t = Recorder::new();
/// let now = Utc::now();
/// assert!(assert::within_duration(&mut t, &now, &Utc::now(), TimeDelta::seconds(10), &[]));
/// ```
#[track_caller]
pub fn within_duration<R, Tz1, Tz2>(
    t: &mut R,
    expected: &DateTime<Tz1>,
    actual: &DateTime<Tz2>,
    delta: TimeDelta,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    Tz1: TimeZone,
    Tz2: TimeZone,
    Tz1::Offset: fmt::Display,
    Tz2::Offset: fmt::Display,
{
    Assert::new(t).within_duration(expected, actual, delta, msg_and_args)
}

/// ```
/// use assertkit::{Recorder, assert};
///
/// let mut t = Recorder::new();
/// let parsed: Result<u32, _> = "42".parse::<u32>();
/// if assert::no_error(&mut t, &parsed, &[]) {
///     assert::equal(&mut t, &42, &parsed.unwrap(), &[]);
/// }
/// ```
#[track_caller]
pub fn no_error<R, E>(t: &mut R, err: &E, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    E: AsError + ?Sized,
{
    Assert::new(t).no_error(err, msg_and_args)
}

#[track_caller]
pub fn error<R, E>(t: &mut R, err: &E, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    E: AsError + ?Sized,
{
    Assert::new(t).error(err, msg_and_args)
}

#[track_caller]
pub fn equal_error<R, E>(
    t: &mut R,
    err: &E,
    expected: &str,
    msg_and_args: &[&dyn fmt::Display],
) -> bool
where
    R: Reporter + ?Sized,
    E: AsError + ?Sized,
{
    Assert::new(t).equal_error(err, expected, msg_and_args)
}

#[track_caller]
pub fn true_<R: Reporter + ?Sized>(
    t: &mut R,
    value: bool,
    msg_and_args: &[&dyn fmt::Display],
) -> bool {
    Assert::new(t).true_(value, msg_and_args)
}

#[track_caller]
pub fn false_<R: Reporter + ?Sized>(
    t: &mut R,
    value: bool,
    msg_and_args: &[&dyn fmt::Display],
) -> bool {
    Assert::new(t).false_(value, msg_and_args)
}

#[track_caller]
pub fn nil<R, T>(t: &mut R, value: &T, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    Assert::new(t).nil(value, msg_and_args)
}

#[track_caller]
pub fn not_nil<R, T>(t: &mut R, value: &T, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    Assert::new(t).not_nil(value, msg_and_args)
}

#[track_caller]
pub fn empty<R, T>(t: &mut R, value: &T, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    Assert::new(t).empty(value, msg_and_args)
}

#[track_caller]
pub fn not_empty<R, T>(t: &mut R, value: &T, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    Assert::new(t).not_empty(value, msg_and_args)
}

#[track_caller]
pub fn len<R, T>(t: &mut R, value: &T, length: usize, msg_and_args: &[&dyn fmt::Display]) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    Assert::new(t).len(value, length, msg_and_args)
}

#[track_caller]
pub fn fail<R: Reporter + ?Sized>(
    t: &mut R,
    failure: &str,
    msg_and_args: &[&dyn fmt::Display],
) -> bool {
    Assert::new(t).fail(failure, msg_and_args)
}

/// HTML equality ignoring whitespace between tags.
///
/// ```
/// use assertkit::{Recorder, assert};
///
/// let mut t = Recorder::new();
/// assert::equal_html(&mut t, "<p>Hello</p> <p>world<p>", "<p>Hello</p>    <p>world<p>");
/// assert!(!t.failed());
/// ```
#[track_caller]
pub fn equal_html<R: Reporter + ?Sized>(t: &mut R, expected: &str, actual: &str) {
    Assert::new(t).equal_html(expected, actual)
}
