// Whitespace-insensitive HTML comparison
// Only whitespace between a closing `>` and the next `<` is ignored; this is
// not an HTML parser.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static HTML_SPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(HTML_SPACE_PATTERN).expect("invalid html space regex"));

/// Whitespace run (line breaks included) between two tags
const HTML_SPACE_PATTERN: &str = r"(?m)>\s+<";

/// Trim `html` and collapse whitespace between adjacent tags
pub fn normalize_html(html: &str) -> Cow<'_, str> {
    HTML_SPACE_REGEX.replace_all(html.trim(), "><")
}

/// Outcome of comparing two fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlComparison {
    Equal,
    /// Trimmed expected fragment and normalized actual fragment
    Different { expected: String, actual: String },
}

pub fn compare_html(expected: &str, actual: &str) -> HtmlComparison {
    let expected = expected.trim();
    let normalized_actual = normalize_html(actual);

    if normalize_html(expected) == normalized_actual {
        HtmlComparison::Equal
    } else {
        HtmlComparison::Different {
            expected: expected.to_string(),
            actual: normalized_actual.into_owned(),
        }
    }
}
