#![expect(missing_docs, reason = "tests")]

use microlog::sink::{CaptureSink, ConsoleSink};
use microlog::{Level, Logger, Sink, Value, args};
use pretty_assertions::assert_eq;
use serial_test::serial;

static SINK: CaptureSink = CaptureSink::new();

/// Registers the shared default logger, tolerating an earlier registration
/// from another test, and clears any leftover output.
fn register_default() -> &'static CaptureSink {
    let _ = microlog::set_default(Logger::new(Level::Verbose, &SINK));
    SINK.take();
    &SINK
}

#[test]
fn full_line_through_an_owned_logger() {
    let sink = CaptureSink::new();
    let logger = Logger::new(Level::Trace, &sink);

    logger.infoln(
        "%s: %d events, mask %X, ok %T",
        args!("rx", 17, 0xFFu32, true),
    );
    logger.verboseln("below the threshold", &[]);

    assert_eq!(sink.take(), "I: rx: 17 events, mask 0x000000ff, ok true\r");
}

#[test]
fn decorated_lines() {
    fn stamp(sink: &dyn Sink, _: Level) {
        sink.write_str("12:00 ");
    }

    fn trailer(sink: &dyn Sink, level: Level) {
        if level <= Level::Error {
            sink.write_str(" !");
        }
    }

    let sink = CaptureSink::new();
    let mut logger = Logger::new(Level::Verbose, &sink);
    logger.set_prefix(stamp);
    logger.set_suffix(trailer);

    logger.errorln("bus fault at %p", args!(0x2000_0000usize as *const u8));
    logger.infoln("recovered", &[]);

    assert_eq!(
        sink.take(),
        "12:00 E: bus fault at 0x20000000 !\r12:00 I: recovered\r"
    );
}

#[test]
fn reconfiguration_between_calls() {
    let sink = CaptureSink::new();
    let mut logger = Logger::with_show_level(Level::Silent, &sink, false);

    logger.warningln("dropped while silent", &[]);
    assert!(sink.is_empty());

    logger.set_level(Level::Warning);
    logger.warningln("t=%D", args!(36.618f64));
    assert_eq!(sink.take(), "t=36.62\r");

    logger.set_show_level(true);
    logger.fatalln("gone", &[]);
    assert_eq!(sink.take(), "F: gone\r");
}

#[test]
fn explicit_value_slices_match_the_args_macro() {
    let sink = CaptureSink::new();
    let logger = Logger::new(Level::Verbose, &sink);

    logger.info("%c%c", &[Value::Char('h'), Value::Char('i')]);
    let explicit = sink.take();

    logger.info("%c%c", args!('h', 'i'));
    assert_eq!(explicit, sink.take());
}

#[test]
#[serial]
fn macros_route_through_the_default_logger() {
    let sink = register_default();

    microlog::infoln!("boot complete in %l us", 1532i64);
    microlog::warningln!("battery at %d%%", 9);
    microlog::logln!(Level::Trace, "raw %B", 0b1010u32);

    assert_eq!(
        sink.take(),
        "I: boot complete in 1532 us\rW: battery at 9%\rT: raw 0b1010\r"
    );
}

#[test]
#[serial]
fn registration_is_set_once() {
    register_default();

    static OTHER: ConsoleSink = ConsoleSink::DEFAULT;
    assert!(microlog::set_default(Logger::new(Level::Silent, &OTHER)).is_err());

    microlog::errorln!("still captured");
    assert_eq!(SINK.take(), "E: still captured\r");
}
