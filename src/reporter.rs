// Reporters record failed checks on behalf of the calling test

use std::fmt;

/// Capability to record a failed check.
///
/// Checks never own their reporter; it is always passed in explicitly, usually
/// as `&mut` to a value living in the test body.
pub trait Reporter {
    /// Record a formatted failure
    fn errorf(&mut self, args: fmt::Arguments<'_>);

    /// Mark the calling frame as a helper so failures are attributed to the
    /// caller. Reporters that have no notion of frames ignore it.
    fn helper(&mut self) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }

    fn helper(&mut self) {
        (**self).helper()
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }

    fn helper(&mut self) {
        (**self).helper()
    }
}

/// In-memory reporter, mostly useful to test checks themselves
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    failures: Vec<String>,
    helper_calls: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.failures.last().map(String::as_str)
    }

    pub fn helper_calls(&self) -> usize {
        self.helper_calls
    }

    /// Drain recorded failures, leaving the recorder clean
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.failures)
    }
}

impl Reporter for Recorder {
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.failures.push(args.to_string());
    }

    fn helper(&mut self) {
        self.helper_calls += 1;
    }
}

/// Reporter for `#[test]` functions.
///
/// Failures are collected while the test keeps running; when the reporter is
/// dropped with failures recorded it panics with all of them, failing the test.
#[derive(Debug, Default)]
pub struct TestReporter {
    name: Option<String>,
    failures: Vec<String>,
}

impl TestReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            failures: Vec::new(),
        }
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

impl Reporter for TestReporter {
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        let failure = args.to_string();
        tracing::error!(
            test = self.name.as_deref().unwrap_or("<unnamed>"),
            "{}",
            failure
        );
        self.failures.push(failure);
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.failures.is_empty() || std::thread::panicking() {
            return;
        }

        let header = match &self.name {
            Some(name) => format!("{}: {} check(s) failed", name, self.failures.len()),
            None => format!("{} check(s) failed", self.failures.len()),
        };
        panic!("{}\n{}", header, self.failures.join("\n"));
    }
}

/// Render the optional extra message arguments of a check.
///
/// No arguments yield an empty string and a single argument is rendered as is.
/// With more, the first is a template whose `{}` placeholders are filled in
/// order by the rest; leftovers are appended separated by spaces.
pub fn message_from_args(msg_and_args: &[&dyn fmt::Display]) -> String {
    match msg_and_args {
        [] => String::new(),
        [only] => only.to_string(),
        [template, args @ ..] => {
            let template = template.to_string();
            let mut args = args.iter();
            let mut out = String::with_capacity(template.len());
            let mut pieces = template.split("{}").peekable();

            while let Some(piece) = pieces.next() {
                out.push_str(piece);
                if pieces.peek().is_some() {
                    match args.next() {
                        Some(arg) => out.push_str(&arg.to_string()),
                        None => out.push_str("{}"),
                    }
                }
            }

            for extra in args {
                out.push(' ');
                out.push_str(&extra.to_string());
            }

            out
        }
    }
}
