use std::io::Write;

use super::Sink;

/// Sink that writes unbuffered to stdout.
///
/// Intended for host-side tools and examples; firmware supplies its own
/// platform sink (UART, RTT, ...).
///
/// # Examples
///
/// ```rust
/// use microlog::sink::ConsoleSink;
/// use microlog::{Level, Logger};
///
/// let logger = Logger::new(Level::Verbose, &ConsoleSink::DEFAULT);
/// logger.infoln("booted in %u ms", &[137u32.into()]);
/// ```
#[derive(Debug, Default)]
pub struct ConsoleSink(());

impl ConsoleSink {
    /// A `const` version of `ConsoleSink::default()` to allow use as a
    /// `&'static`.
    pub const DEFAULT: Self = ConsoleSink(());
}

impl Sink for ConsoleSink {
    fn write_char(&self, c: char) -> usize {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    fn write_str(&self, s: &str) -> usize {
        let mut stdout = std::io::stdout().lock();
        match stdout.write_all(s.as_bytes()).and_then(|()| stdout.flush()) {
            Ok(()) => s.len(),
            Err(_) => 0,
        }
    }
}
