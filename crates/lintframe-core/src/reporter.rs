//! Sink for framework-level problems.
//!
//! Lint diagnostics never go through a reporter; they are returned by the
//! [`Linter`](crate::Linter). Reporters receive failures such as unreadable
//! files or rejected rule registrations.

use std::fmt;

/// Receives framework-level exceptions and messages.
pub trait Reporter {
    /// A failure that aborted an operation.
    fn exception(&self, error: &dyn std::error::Error);

    /// Something suspicious that did not abort anything.
    fn warn(&self, message: &str);

    /// A problem the caller should act on.
    fn error(&self, message: &str);

    /// Progress or status information.
    fn info(&self, message: &str);
}

/// Line sink used by [`PrintingReporter`].
pub type LineSink = Box<dyn Fn(&str) + Send + Sync>;

/// Writes severity-prefixed lines to a sink (stdout by default).
pub struct PrintingReporter {
    sink: LineSink,
}

impl Default for PrintingReporter {
    fn default() -> Self {
        Self::new(Box::new(|line| println!("{line}")))
    }
}

impl PrintingReporter {
    /// Creates a reporter writing to `sink`.
    #[must_use]
    pub fn new(sink: LineSink) -> Self {
        Self { sink }
    }

    /// Creates a reporter writing to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(|line| eprintln!("{line}")))
    }
}

impl fmt::Debug for PrintingReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintingReporter").finish_non_exhaustive()
    }
}

impl Reporter for PrintingReporter {
    fn exception(&self, error: &dyn std::error::Error) {
        (self.sink)(&format!("EXCEPTION: {error}"));
    }

    fn warn(&self, message: &str) {
        (self.sink)(&format!("WARN: {message}"));
    }

    fn error(&self, message: &str) {
        (self.sink)(&format!("ERROR: {message}"));
    }

    fn info(&self, message: &str) {
        (self.sink)(&format!("INFO: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameError;
    use std::sync::{Arc, Mutex};

    fn capturing() -> (PrintingReporter, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let reporter =
            PrintingReporter::new(Box::new(move |l| captured.lock().unwrap().push(l.to_string())));
        (reporter, lines)
    }

    #[test]
    fn prefixes_each_severity() {
        let (reporter, lines) = capturing();
        reporter.exception(&NameError::new("bad"));
        reporter.warn("careful");
        reporter.error("broken");
        reporter.info("done");

        let lines = lines.lock().unwrap();
        assert!(lines[0].starts_with("EXCEPTION: Invalid rule name `bad`"));
        assert_eq!(lines[1..], ["WARN: careful", "ERROR: broken", "INFO: done"]);
    }
}
