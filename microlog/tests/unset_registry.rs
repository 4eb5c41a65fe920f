#![expect(missing_docs, reason = "tests")]

use microlog::sink::CaptureSink;
use microlog::{Level, Logger};
use pretty_assertions::assert_eq;

static SINK: CaptureSink = CaptureSink::new();

// This test target must stay a single test: each integration test target runs
// in its own process, and observing the registry before registration requires
// that nothing else in the process has registered first.
#[test]
fn unset_registry_logs_nothing() {
    let unset = microlog::default_logger();
    assert_eq!(unset.level(), Level::Silent);

    microlog::infoln!("dropped before registration");
    microlog::fatalln!("dropped too");
    unset.errorln("also dropped", &[]);

    microlog::set_default(Logger::new(Level::Verbose, &SINK)).unwrap();
    microlog::infoln!("first line");
    assert_eq!(SINK.take(), "I: first line\r");
}
