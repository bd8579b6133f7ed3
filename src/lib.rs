pub mod assert;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;

pub use assert::{Assert, ComparisonEngine, JsonEngine};
pub use config::Config;
pub use reporter::{Recorder, Reporter, TestReporter};
