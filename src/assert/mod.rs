// Assertion module

pub mod checks;
pub mod comparator;
pub mod diff;
pub mod engine;
pub mod failure;
pub mod forward;
pub mod html;
pub mod inspect;

pub use checks::*;
pub use comparator::ValueComparator;
pub use diff::get_value_diff;
pub use engine::{AssertionResult, ComparisonEngine, Inspected, JsonEngine, Unmatched};
pub use forward::{AsError, Assert};
pub use html::{HtmlComparison, compare_html, normalize_html};
