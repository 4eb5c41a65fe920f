//! Process-wide default logger registry.
//!
//! The registry is explicit and set-once: an application that wants a shared
//! logger builds one against a `'static` sink and registers it with
//! [`set_default`]; until then (and always when the `enable` feature is off)
//! [`default_logger`] hands out a logger whose sink discards everything.
//! Libraries and tests that want isolation simply construct their own
//! [`Logger`] and never touch the registry.

use core::sync::atomic::{AtomicUsize, Ordering};
use core::{error, fmt};

use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;

/// No-op sink backing the logger returned before [`set_default`] is called.
#[derive(Debug)]
struct NopSink;

impl Sink for NopSink {
    fn write_char(&self, _: char) -> usize {
        0
    }

    fn write_str(&self, _: &str) -> usize {
        0
    }
}

static NO_SINK: NopSink = NopSink;

static NO_LOGGER: Logger<'static> = Logger::with_show_level(Level::Silent, &NO_SINK, true);

/// The `DEFAULT_LOGGER` static holds the registered default logger. It is
/// protected by the `DEFAULT_INIT` static which determines whether
/// `DEFAULT_LOGGER` has been initialized.
static mut DEFAULT_LOGGER: Logger<'static> =
    Logger::with_show_level(Level::Silent, &NO_SINK, true);

static DEFAULT_INIT: AtomicUsize = AtomicUsize::new(0);

// There are three different states that we care about:
// - the default logger is uninitialized
// - the default logger is initializing (`set_default` has been called but
//   `DEFAULT_LOGGER` hasn't been set yet)
// - the default logger is active
const UNINITIALIZED: usize = 0;
const INITIALIZING: usize = 1;
const INITIALIZED: usize = 2;

/// Registers the process-wide default logger.
///
/// Can only succeed once; later calls fail and leave the registered logger
/// untouched. The logger's configuration (threshold, tag display, hooks) is
/// fixed at registration.
///
/// # Examples
///
/// ```rust,no_run
/// use microlog::sink::ConsoleSink;
/// use microlog::{Level, Logger};
///
/// microlog::set_default(Logger::new(Level::Info, &ConsoleSink::DEFAULT)).unwrap();
/// microlog::infoln!("ready");
/// ```
pub fn set_default(logger: Logger<'static>) -> Result<(), SetDefaultError> {
    if DEFAULT_INIT
        .compare_exchange(
            UNINITIALIZED,
            INITIALIZING,
            Ordering::Acquire,
            Ordering::Relaxed,
        )
        .is_ok()
    {
        // SAFETY: this is guarded by the atomic
        unsafe { DEFAULT_LOGGER = logger }
        DEFAULT_INIT.store(INITIALIZED, Ordering::Release);
        Ok(())
    } else {
        Err(SetDefaultError(()))
    }
}

/// Returns a reference to the default logger.
///
/// If no default has been registered, a no-op logger is returned.
pub fn default_logger() -> &'static Logger<'static> {
    #[cfg(not(feature = "enable"))]
    {
        &NO_LOGGER
    }

    #[cfg(feature = "enable")]
    // Acquire memory ordering guarantees that current thread would see any
    // memory writes that happened before store of the value into
    // `DEFAULT_INIT` with memory ordering `Release` or stronger.
    //
    // Since the value `INITIALIZED` is written only after `DEFAULT_LOGGER`
    // was initialized, observing it after `Acquire` load here makes the write
    // to the `DEFAULT_LOGGER` static synchronized with current thread.
    if DEFAULT_INIT.load(Ordering::Acquire) != INITIALIZED {
        &NO_LOGGER
    } else {
        // SAFETY: this is guarded by the atomic
        unsafe {
            #[expect(clippy::deref_addrof, reason = "false positive")]
            &*&raw const DEFAULT_LOGGER
        }
    }
}

/// The type returned by [`set_default`] if a default logger has already been
/// registered.
#[derive(Debug)]
pub struct SetDefaultError(());

impl SetDefaultError {
    const MESSAGE: &'static str = "a default logger has already been set";
}

impl fmt::Display for SetDefaultError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(Self::MESSAGE)
    }
}

impl error::Error for SetDefaultError {}
