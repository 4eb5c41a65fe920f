//! Logging macros targeting the default logger.
//!
//! One macro per (severity x newline-or-not) combination, mirroring the
//! method surface of [`Logger`][crate::Logger], plus the generic
//! [`log!`][crate::log]/[`logln!`][crate::logln] pair they delegate to.
//! Arguments after the format string are converted through
//! [`Value::from`][crate::Value], so call sites pass plain Rust values:
//!
//! ```rust
//! microlog::infoln!("%s: %d events, mask %X", "rx", 17, 0xFFu32);
//! ```
//!
//! All macros route through [`default_logger`][crate::default_logger]; until
//! a default is registered they emit nothing.

/// Converts a list of expressions into a format-argument slice.
///
/// # Examples
///
/// ```rust
/// use microlog::Value;
///
/// let args: &[Value] = microlog::args!(42, "sensor", true);
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::Value::from($arg)),*][..]
    };
}

/// Logs a message at an explicit level through the default logger.
///
/// # Examples
///
/// ```rust
/// use microlog::Level;
///
/// microlog::log!(Level::Warning, "temperature is %d degrees", 85);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $message:expr $(, $($args:expr),* $(,)?)?) => {
        $crate::default_logger().log($level, $message, $crate::args!($($($args),*)?))
    };
}

/// Logs a message at an explicit level, terminated with a carriage return.
#[macro_export]
macro_rules! logln {
    ($level:expr, $message:expr $(, $($args:expr),* $(,)?)?) => {
        $crate::default_logger().logln($level, $message, $crate::args!($($($args),*)?))
    };
}

/// Logs a fatal error message through the default logger.
#[macro_export]
macro_rules! fatal {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Fatal, $($args)*)
    };
}

/// Logs a fatal error message with a line terminator.
#[macro_export]
macro_rules! fatalln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Fatal, $($args)*)
    };
}

/// Logs an error message through the default logger.
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Error, $($args)*)
    };
}

/// Logs an error message with a line terminator.
#[macro_export]
macro_rules! errorln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Error, $($args)*)
    };
}

/// Logs a warning message through the default logger.
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Warning, $($args)*)
    };
}

/// Logs a warning message with a line terminator.
#[macro_export]
macro_rules! warningln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Warning, $($args)*)
    };
}

/// Logs a notice message through the default logger. Notices share severity 4
/// with info messages.
#[macro_export]
macro_rules! notice {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::NOTICE, $($args)*)
    };
}

/// Logs a notice message with a line terminator.
#[macro_export]
macro_rules! noticeln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::NOTICE, $($args)*)
    };
}

/// Logs an info message through the default logger.
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Info, $($args)*)
    };
}

/// Logs an info message with a line terminator.
///
/// # Examples
///
/// ```rust
/// microlog::infoln!("Hex: %X", 0xDEADu32);
/// ```
#[macro_export]
macro_rules! infoln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Info, $($args)*)
    };
}

/// Logs a trace message through the default logger.
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Trace, $($args)*)
    };
}

/// Logs a trace message with a line terminator.
#[macro_export]
macro_rules! traceln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Trace, $($args)*)
    };
}

/// Logs a verbose message through the default logger.
#[macro_export]
macro_rules! verbose {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Verbose, $($args)*)
    };
}

/// Logs a verbose message with a line terminator.
#[macro_export]
macro_rules! verboseln {
    ($($args:tt)*) => {
        $crate::logln!($crate::Level::Verbose, $($args)*)
    };
}
