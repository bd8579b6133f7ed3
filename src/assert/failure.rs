// Rendering of failed checks into reporter messages

use std::fmt;
use std::panic::Location;

use super::engine::AssertionResult;
use crate::reporter::{Reporter, message_from_args};

/// Text describing a failed result, `None` for `Pass`
pub fn render_failure(result: &AssertionResult) -> Option<String> {
    match result {
        AssertionResult::Pass => None,
        AssertionResult::Fail {
            message,
            expected: Some(expected),
            actual: Some(actual),
        } => Some(format!(
            "{}\nexpected: {}\nactual  : {}",
            message, expected, actual
        )),
        AssertionResult::Fail { message, .. } => Some(message.clone()),
        AssertionResult::Error(message) => Some(message.clone()),
    }
}

/// Align `label: content` rows, indenting continuation lines under the
/// content column.
pub fn labeled_output(content: &[(&str, String)]) -> String {
    let longest = content
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, text) in content {
        output.push('\t');
        output.push_str(label);
        output.push(':');
        output.push_str(&" ".repeat(longest - label.len()));
        output.push('\t');
        output.push_str(&indent_lines(text, longest));
        output.push('\n');
    }
    output
}

fn indent_lines(text: &str, longest_label: usize) -> String {
    let continuation = format!("\n\t{}\t", " ".repeat(longest_label + 1));
    text.lines().collect::<Vec<_>>().join(&continuation)
}

/// Record a failed check through the reporter
pub fn report<R: Reporter + ?Sized>(
    t: &mut R,
    check: &str,
    location: &Location<'_>,
    failure: &str,
    msg_and_args: &[&dyn fmt::Display],
) {
    tracing::debug!(check, location = %location, "check failed");

    let mut content = vec![
        ("Error Trace", location.to_string()),
        ("Error", failure.to_string()),
    ];

    let message = message_from_args(msg_and_args);
    if !message.is_empty() {
        content.push(("Messages", message));
    }

    t.errorf(format_args!("\n{}", labeled_output(&content)));
}
