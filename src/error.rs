// Error types surfaced while inspecting values for comparison

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be serialized into its inspectable form
    #[error("cannot inspect value of type `{type_name}`: {source}")]
    Inspect {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_inspect_error_mentions_type() {
        let err = Error::Inspect {
            type_name: "my::Type",
            source: serde_json::Error::custom("boom"),
        };
        let text = err.to_string();
        assert!(text.contains("my::Type"));
        assert!(text.contains("boom"));
    }
}
