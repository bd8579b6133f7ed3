use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "assertkit=warn";

/// One line per event: `HH:MM:SS.mmm LEVEL [target] fields`.
///
/// The level is right-aligned to five columns so messages line up in test
/// output; the target can be left out when only this crate logs.
#[derive(Debug, Clone, Copy)]
pub struct CheckLogFormatter {
    target: bool,
}

impl CheckLogFormatter {
    pub fn new() -> Self {
        Self { target: true }
    }

    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }
}

impl Default for CheckLogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for CheckLogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        write!(
            writer,
            "{} {:>5} ",
            Local::now().format("%H:%M:%S%.3f"),
            metadata.level()
        )?;
        if self.target {
            write!(writer, "[{}] ", metadata.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Route check logging to the test harness output.
///
/// Honors `RUST_LOG`; safe to call from every test, only the first call
/// installs the subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .event_format(CheckLogFormatter::new())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_test_writer()
        .try_init();
}
