//! Log severity levels.
//!
//! Levels are ordered by urgency: the lower the numeric value, the more urgent
//! the message. A message is emitted when its level is less than or equal to
//! the logger's current threshold, so raising the threshold towards
//! [`Level::Verbose`] lets progressively less urgent messages through, and
//! [`Level::Silent`] suppresses everything.

/// Severity of a log message, doubling as the logger's emission threshold.
///
/// # Examples
///
/// ```rust
/// use microlog::Level;
///
/// // More urgent levels compare as smaller.
/// assert!(Level::Fatal < Level::Verbose);
///
/// // Raw level numbers are clamped into the valid range.
/// assert_eq!(Level::from(-3), Level::Silent);
/// assert_eq!(Level::from(42), Level::Verbose);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// No output at all. Only valid as a threshold; messages cannot be logged
    /// at this level.
    Silent = 0,

    /// Fatal errors.
    Fatal = 1,

    /// All errors.
    Error = 2,

    /// Errors and warnings.
    Warning = 3,

    /// Errors, warnings and notices.
    Info = 4,

    /// Errors, warnings, notices and traces.
    Trace = 5,

    /// Everything.
    Verbose = 6,
}

impl Level {
    /// Alias for [`Level::Info`], kept for source compatibility with call
    /// sites written against the notice/info split of older logging APIs.
    /// Notice and info share severity 4 and are observationally identical.
    pub const NOTICE: Level = Level::Info;

    /// Single-character tag written in front of an emitted message when level
    /// display is on.
    #[cfg(feature = "enable")]
    pub(crate) fn tag(self) -> &'static str {
        match self {
            // Unreachable through the gate; kept total so callers need no unwrap.
            Level::Silent => "",
            Level::Fatal => "F",
            Level::Error => "E",
            Level::Warning => "W",
            Level::Info => "I",
            Level::Trace => "T",
            Level::Verbose => "V",
        }
    }
}

impl From<i32> for Level {
    /// Converts a raw level number, silently clamping out-of-range values
    /// into `[Silent, Verbose]`.
    fn from(raw: i32) -> Self {
        match raw {
            i32::MIN..=0 => Level::Silent,
            1 => Level::Fatal,
            2 => Level::Error,
            3 => Level::Warning,
            4 => Level::Info,
            5 => Level::Trace,
            _ => Level::Verbose,
        }
    }
}
