//! The output sink abstraction.
//!
//! A [`Sink`] is the destination the logging engine renders into: a console,
//! a UART, a network socket, an in-memory buffer. The engine only ever borrows
//! a sink and depends on nothing beyond this trait; concrete sinks are
//! supplied by the embedding application.
//!
//! Implementations only need to provide [`write_char`][Sink::write_char] and
//! [`write_str`][Sink::write_str]; the numeric methods come with default
//! implementations that perform allocation-free base conversion and may be
//! overridden where the platform has a cheaper path (a `printf`-backed
//! adapter, for instance).
//!
//! # Built-in sinks
//!
//! - [`ConsoleSink`] - unbuffered writes to stdout (requires `std`)
//! - [`CaptureSink`] - collects output in memory for tests (requires `std`)
//!
//! # Concurrency
//!
//! Write methods take `&self` and the engine performs no locking. A sink that
//! is shared across threads or interrupt contexts must provide its own
//! protection; single-context firmware needs none.

#[cfg(feature = "std")]
mod capture;
#[cfg(feature = "std")]
mod console;

use core::fmt::Debug;

#[cfg(feature = "std")]
pub use capture::CaptureSink;
#[cfg(feature = "std")]
pub use console::ConsoleSink;

use crate::convert;

/// Abstract destination for rendered log output.
///
/// Every method returns the number of units written, where `0` signals
/// failure. Failures are never escalated: the engine ignores the counts, and
/// implementations must not panic.
///
/// # Examples
///
/// ```rust
/// use microlog::Sink;
///
/// #[derive(Debug)]
/// struct NullSink;
///
/// impl Sink for NullSink {
///     fn write_char(&self, _: char) -> usize {
///         0
///     }
///
///     fn write_str(&self, _: &str) -> usize {
///         0
///     }
/// }
/// ```
pub trait Sink: Debug {
    /// Writes a single character.
    fn write_char(&self, c: char) -> usize;

    /// Writes a string verbatim.
    fn write_str(&self, s: &str) -> usize;

    /// Writes a signed 32-bit integer in the given base.
    ///
    /// Base 10 preserves the sign; bases 2 and 16 render the two's-complement
    /// bit pattern of the value, never a minus sign. Unsupported bases fall
    /// back to decimal.
    fn write_int(&self, value: i32, base: u8) -> usize {
        if convert::normalize_base(base) == convert::DEC {
            self.write_long(value as i64, convert::DEC)
        } else {
            self.write_uint(value as u32, base)
        }
    }

    /// Writes an unsigned 32-bit integer in the given base.
    fn write_uint(&self, value: u32, base: u8) -> usize {
        self.write_ulong(value as u64, base)
    }

    /// Writes a signed 64-bit integer in the given base, with the same sign
    /// rules as [`write_int`][Sink::write_int].
    fn write_long(&self, value: i64, base: u8) -> usize {
        if convert::normalize_base(base) == convert::DEC {
            let mut buf: convert::DigitBuffer = [0; convert::MAX_DIGITS];
            let digits = convert::unsigned_digits(value.unsigned_abs(), convert::DEC, &mut buf);
            if value < 0 {
                self.write_char('-') + self.write_str(digits)
            } else {
                self.write_str(digits)
            }
        } else {
            self.write_ulong(value as u64, base)
        }
    }

    /// Writes an unsigned 64-bit integer in the given base.
    fn write_ulong(&self, value: u64, base: u8) -> usize {
        let mut buf: convert::DigitBuffer = [0; convert::MAX_DIGITS];
        self.write_str(convert::unsigned_digits(value, base, &mut buf))
    }

    /// Writes a double at two decimal places of precision.
    fn write_double(&self, value: f64) -> usize {
        use core::fmt::Write;

        let mut writer = SinkWriter {
            sink: self,
            count: 0,
        };
        // The adapter never reports failure, so this cannot error.
        let _ = write!(writer, "{value:.2}");
        writer.count
    }
}

/// `core::fmt` adapter over a sink, used by the default float rendering.
struct SinkWriter<'a, S: ?Sized> {
    sink: &'a S,
    count: usize,
}

impl<S> core::fmt::Write for SinkWriter<'_, S>
where
    S: Sink + ?Sized,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // Sink failures degrade to short counts rather than aborting the write.
        self.count += self.sink.write_str(s);
        Ok(())
    }
}
