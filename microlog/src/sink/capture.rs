use std::string::String;
use std::sync::Mutex;

use super::Sink;

/// A sink for testing that collects all output in memory.
///
/// Useful for unit tests and integration tests where you need to verify the
/// exact byte sequence a logger produced.
///
/// # Examples
///
/// ```rust
/// use microlog::sink::CaptureSink;
/// use microlog::{Level, Logger};
///
/// let sink = CaptureSink::new();
/// let logger = Logger::new(Level::Verbose, &sink);
/// logger.errorln("code %x", &[0xBEEFu32.into()]);
/// assert_eq!(sink.take(), "E: code beef\r");
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    output: Mutex<String>,
}

impl CaptureSink {
    /// Creates an empty capture sink. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            output: Mutex::new(String::new()),
        }
    }

    /// Returns the captured output, leaving the sink empty.
    pub fn take(&self) -> String {
        std::mem::take(&mut self.output.lock().unwrap())
    }

    /// Returns a copy of the captured output.
    pub fn contents(&self) -> String {
        self.output.lock().unwrap().clone()
    }

    /// Whether anything has been written since the last [`take`][Self::take].
    pub fn is_empty(&self) -> bool {
        self.output.lock().unwrap().is_empty()
    }
}

impl Sink for CaptureSink {
    fn write_char(&self, c: char) -> usize {
        self.output.lock().unwrap().push(c);
        c.len_utf8()
    }

    fn write_str(&self, s: &str) -> usize {
        self.output.lock().unwrap().push_str(s);
        s.len()
    }
}
