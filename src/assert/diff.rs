use console::Style;
use dissimilar::{Chunk, diff};
use serde_json::Value;
use std::fmt::Write;

use super::inspect::{Special, render_pretty, special};

/// Character diff of two values in their pretty display form.
///
/// Without color, removed text is wrapped as `[-text-]` and inserted text as
/// `{+text+}`.
pub fn get_value_diff(expected: &Value, actual: &Value, color: bool) -> String {
    let expected_str = render_pretty(expected);
    let actual_str = render_pretty(actual);

    let mut output = String::new();
    let _ = writeln!(output, "Diff (Expected - / Actual +):");

    for chunk in diff(&expected_str, &actual_str) {
        let _ = match (chunk, color) {
            (Chunk::Equal(text), true) => write!(output, "{}", Style::new().dim().apply_to(text)),
            (Chunk::Delete(text), true) => write!(output, "{}", Style::new().red().apply_to(text)),
            (Chunk::Insert(text), true) => {
                write!(output, "{}", Style::new().green().apply_to(text))
            }
            (Chunk::Equal(text), false) => write!(output, "{}", text),
            (Chunk::Delete(text), false) => write!(output, "[-{}-]", text),
            (Chunk::Insert(text), false) => write!(output, "{{+{}+}}", text),
        };
    }

    output
}

/// Diffs only help for containers; scalars are already shown side by side
pub fn is_diffable(expected: &Value, actual: &Value) -> bool {
    let container = |value: &Value| match special(value) {
        Some(Special::Some(inner)) => inner.is_array() || inner.is_object(),
        Some(_) => false,
        None => value.is_array() || value.is_object(),
    };

    container(expected)
        && container(actual)
        && std::mem::discriminant(expected) == std::mem::discriminant(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_value_diff_plain() {
        let expected = json!({
            "name": "Alice",
            "age": 30
        });
        let actual = json!({
            "name": "Bob",
            "age": 30
        });

        let diff = get_value_diff(&expected, &actual, false);

        assert!(diff.starts_with("Diff (Expected - / Actual +):"));
        assert!(diff.contains("[-"));
        assert!(diff.contains("{+"));
        assert!(diff.contains("\"age\": 30"));
    }

    #[test]
    fn test_get_value_diff_identical() {
        let value = json!([1, 2, 3]);
        let diff = get_value_diff(&value, &value, false);
        assert!(!diff.contains("[-"));
        assert!(!diff.contains("{+"));
    }

    #[test]
    fn test_is_diffable() {
        assert!(is_diffable(&json!([1]), &json!([2])));
        assert!(is_diffable(&json!({}), &json!({"a": 1})));
        assert!(!is_diffable(&json!(1), &json!(2)));
        assert!(!is_diffable(&json!([1]), &json!({"a": 1})));
        assert!(!is_diffable(&json!({"$float": "inf"}), &json!({"$float": "-inf"})));
    }

    #[test]
    fn test_get_value_diff_shows_display_form() {
        let diff = get_value_diff(&json!([{"$float": "NaN"}]), &json!([{"$some": 1}]), false);
        assert!(diff.contains("NaN"));
        assert!(diff.contains("Some(1)"));
        assert!(!diff.contains("$float"));
    }
}
