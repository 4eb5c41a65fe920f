//! The logging engine: severity gating, line decoration and dispatch.

#[cfg(feature = "enable")]
use crate::CR;
#[cfg(feature = "enable")]
use crate::format::format;
use crate::level::Level;
use crate::sink::Sink;
use crate::value::Value;

/// Caller-supplied decoration hook.
///
/// A prefix hook runs immediately before the level tag and message body of
/// every emitted call, a suffix hook immediately after; both receive the sink
/// and the severity of the message. Typical use is a timestamp prefix:
///
/// ```rust
/// use microlog::sink::CaptureSink;
/// use microlog::{Level, Logger, Sink};
///
/// fn timestamp(sink: &dyn Sink, _: Level) {
///     sink.write_ulong(uptime_ms(), 10);
///     sink.write_char(' ');
/// }
/// # fn uptime_ms() -> u64 { 0 }
///
/// let sink = CaptureSink::new();
/// let mut logger = Logger::new(Level::Verbose, &sink);
/// logger.set_prefix(timestamp);
/// ```
pub type DecorationFn = fn(&dyn Sink, Level);

/// A leveled logger writing through a borrowed [`Sink`].
///
/// The logger holds a severity threshold, a flag controlling the
/// single-character level tag, and optional prefix/suffix hooks. It borrows
/// its sink for its entire lifetime and never takes ownership; the caller
/// guarantees the sink outlives every logging call.
///
/// Logging calls never mutate the logger: configuration changes only happen
/// through the explicit `set_*`/`clear_*` methods. The logger itself performs
/// no locking; see the [`sink`][crate::sink] module docs for the concurrency
/// contract.
///
/// Construction is `const`, so a logger can live in a `static` and be
/// registered as the process-wide default via
/// [`set_default`][crate::set_default].
///
/// # Examples
///
/// ```rust
/// use microlog::sink::CaptureSink;
/// use microlog::{Level, Logger};
///
/// let sink = CaptureSink::new();
/// let logger = Logger::new(Level::Verbose, &sink);
///
/// logger.infoln("Hex: %X", &[0xDEADu32.into()]);
/// assert_eq!(sink.take(), "I: Hex: 0x0000dead\r");
/// ```
///
/// When built without the `enable` feature, every method is a no-op and the
/// logger carries no state.
#[derive(Debug)]
pub struct Logger<'a> {
    #[cfg(feature = "enable")]
    inner: Inner<'a>,
    #[cfg(not(feature = "enable"))]
    _sink: core::marker::PhantomData<&'a ()>,
}

#[cfg(feature = "enable")]
#[derive(Debug)]
struct Inner<'a> {
    level: Level,
    show_level: bool,
    sink: &'a (dyn Sink + Sync),
    prefix: Option<DecorationFn>,
    suffix: Option<DecorationFn>,
}

impl<'a> Logger<'a> {
    /// Creates a logger with the given threshold, writing through `sink`,
    /// with the level tag shown.
    pub const fn new(level: Level, sink: &'a (dyn Sink + Sync)) -> Self {
        Self::with_show_level(level, sink, true)
    }

    /// Creates a logger, choosing whether each line carries the level tag.
    pub const fn with_show_level(
        level: Level,
        sink: &'a (dyn Sink + Sync),
        show_level: bool,
    ) -> Self {
        #[cfg(not(feature = "enable"))]
        {
            let _ = (level, sink, show_level);
            Self {
                _sink: core::marker::PhantomData,
            }
        }

        #[cfg(feature = "enable")]
        Self {
            inner: Inner {
                level,
                show_level,
                sink,
                prefix: None,
                suffix: None,
            },
        }
    }

    /// Sets the threshold. Accepts a [`Level`] or a raw `i32`, which is
    /// clamped into `[Silent, Verbose]`.
    pub fn set_level(&mut self, level: impl Into<Level>) {
        #[cfg(not(feature = "enable"))]
        let _ = level;

        #[cfg(feature = "enable")]
        {
            self.inner.level = level.into();
        }
    }

    /// The current threshold ([`Level::Silent`] when logging is compiled out).
    pub fn level(&self) -> Level {
        #[cfg(not(feature = "enable"))]
        {
            Level::Silent
        }

        #[cfg(feature = "enable")]
        self.inner.level
    }

    /// Controls the single-character level tag in front of each message.
    pub fn set_show_level(&mut self, show_level: bool) {
        #[cfg(not(feature = "enable"))]
        let _ = show_level;

        #[cfg(feature = "enable")]
        {
            self.inner.show_level = show_level;
        }
    }

    /// Whether the level tag is shown (`false` when logging is compiled out).
    pub fn show_level(&self) -> bool {
        #[cfg(not(feature = "enable"))]
        {
            false
        }

        #[cfg(feature = "enable")]
        self.inner.show_level
    }

    /// Sets a hook to run before each emitted message.
    pub fn set_prefix(&mut self, hook: DecorationFn) {
        #[cfg(not(feature = "enable"))]
        let _ = hook;

        #[cfg(feature = "enable")]
        {
            self.inner.prefix = Some(hook);
        }
    }

    /// Removes the prefix hook.
    pub fn clear_prefix(&mut self) {
        #[cfg(feature = "enable")]
        {
            self.inner.prefix = None;
        }
    }

    /// Sets a hook to run after each emitted message, before the line
    /// terminator.
    pub fn set_suffix(&mut self, hook: DecorationFn) {
        #[cfg(not(feature = "enable"))]
        let _ = hook;

        #[cfg(feature = "enable")]
        {
            self.inner.suffix = Some(hook);
        }
    }

    /// Removes the suffix hook.
    pub fn clear_suffix(&mut self) {
        #[cfg(feature = "enable")]
        {
            self.inner.suffix = None;
        }
    }

    /// Logs a message at an explicit level, without a line terminator.
    ///
    /// Prefer the per-level methods; this is the generic entry point they all
    /// funnel through.
    pub fn log(&self, level: Level, message: &str, args: &[Value<'_>]) {
        self.dispatch(level, false, message, args);
    }

    /// Logs a message at an explicit level, terminated with a carriage
    /// return.
    pub fn logln(&self, level: Level, message: &str, args: &[Value<'_>]) {
        self.dispatch(level, true, message, args);
    }

    /// Logs a fatal error message, tagged `F: `.
    pub fn fatal(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Fatal, false, message, args);
    }

    /// Logs a fatal error message with a line terminator.
    pub fn fatalln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Fatal, true, message, args);
    }

    /// Logs an error message, tagged `E: `.
    pub fn error(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Error, false, message, args);
    }

    /// Logs an error message with a line terminator.
    pub fn errorln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Error, true, message, args);
    }

    /// Logs a warning message, tagged `W: `.
    pub fn warning(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Warning, false, message, args);
    }

    /// Logs a warning message with a line terminator.
    pub fn warningln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Warning, true, message, args);
    }

    /// Logs a notice message. Notices share severity 4 with info messages and
    /// carry the same `I: ` tag.
    pub fn notice(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::NOTICE, false, message, args);
    }

    /// Logs a notice message with a line terminator.
    pub fn noticeln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::NOTICE, true, message, args);
    }

    /// Logs an info message, tagged `I: `.
    pub fn info(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Info, false, message, args);
    }

    /// Logs an info message with a line terminator.
    pub fn infoln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Info, true, message, args);
    }

    /// Logs a trace message, tagged `T: `.
    pub fn trace(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Trace, false, message, args);
    }

    /// Logs a trace message with a line terminator.
    pub fn traceln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Trace, true, message, args);
    }

    /// Logs a verbose message, tagged `V: `.
    pub fn verbose(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Verbose, false, message, args);
    }

    /// Logs a verbose message with a line terminator.
    pub fn verboseln(&self, message: &str, args: &[Value<'_>]) {
        self.dispatch(Level::Verbose, true, message, args);
    }

    fn dispatch(&self, level: Level, newline: bool, message: &str, args: &[Value<'_>]) {
        #[cfg(not(feature = "enable"))]
        let _ = (level, newline, message, args);

        #[cfg(feature = "enable")]
        {
            // Gated-out calls perform zero work: no hooks, no writes.
            if level > self.inner.level || level == Level::Silent {
                return;
            }

            let sink = self.inner.sink;

            if let Some(prefix) = self.inner.prefix {
                prefix(sink, level);
            }
            if self.inner.show_level {
                sink.write_str(level.tag());
                sink.write_str(": ");
            }
            format(sink, message, args);
            if let Some(suffix) = self.inner.suffix {
                suffix(sink, level);
            }
            if newline {
                // Carriage return only, matching the serial-console
                // convention of the classic API this mirrors.
                sink.write_str(CR);
            }
        }
    }
}
