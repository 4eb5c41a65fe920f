//! # `microlog`
//!
//! A small leveled logging facade for embedded and resource-constrained
//! targets.
//!
//! Messages are printf-style format strings rendered through an
//! allocation-free interpreter directly into a byte [`Sink`], with a
//! severity gate, optional level tags, and prefix/suffix decoration hooks.
//! The crate is `no_std` by default and never allocates.
//!
//! ## Feature Flags
//!
//! - `enable` (default) - Enable logging; building with
//!   `default-features = false` compiles every logger into a field-less
//!   no-op without touching call sites
//! - `std` - Standard library support, adding the [`sink::ConsoleSink`] and
//!   [`sink::CaptureSink`] implementations
//! - `serde` - `Serialize`/`Deserialize` for [`Level`], for loading
//!   thresholds from configuration
//!
//! ## Basic Usage
//!
//! Construct a logger against any sink and log through it:
//!
//! ```rust
//! use microlog::sink::CaptureSink;
//! use microlog::{Level, Logger, args};
//!
//! let sink = CaptureSink::new();
//! let logger = Logger::new(Level::Info, &sink);
//!
//! logger.infoln("%s: %d events, mask %X", args!("rx", 17, 0xFFu32));
//! logger.verboseln("dropped by the gate", &[]);
//!
//! assert_eq!(sink.take(), "I: rx: 17 events, mask 0x000000ff\r");
//! ```
//!
//! Or register a process-wide default once and use the macros:
//!
//! ```rust,no_run
//! use microlog::sink::ConsoleSink;
//! use microlog::{Level, Logger};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! microlog::set_default(Logger::new(Level::Trace, &ConsoleSink::DEFAULT))?;
//!
//! microlog::infoln!("boot complete in %l us", 1532i64);
//! microlog::warningln!("battery at %d%%", 9);
//! # Ok(())
//! # }
//! ```
//!
//! The supported conversion specifiers are listed at [`format`].
//!
//! ## Line terminators
//!
//! The `*ln` entry points terminate with a carriage return ([`CR`]), which
//! serial consoles render as a line break. Targets that need `\n` or `\r\n`
//! can log without the terminator and write [`LF`] or [`CRLF`] themselves.
//!
//! ## Conditional Compilation
//!
//! When the `enable` feature is disabled, loggers carry no state and every
//! logging operation compiles to a no-op, ensuring zero overhead in builds
//! that ship without logging.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod convert;
mod format;
mod global;
mod level;
mod logger;
mod macros;
pub mod sink;
mod value;

pub use format::format;
pub use global::{SetDefaultError, default_logger, set_default};
pub use level::Level;
pub use logger::{DecorationFn, Logger};
pub use sink::Sink;
pub use value::Value;

/// Carriage return, the terminator written by the `*ln` entry points.
pub const CR: &str = "\r";

/// Line feed, for sinks that expect Unix line endings.
pub const LF: &str = "\n";

/// Carriage return plus line feed, for sinks that expect DOS line endings.
pub const CRLF: &str = "\r\n";
