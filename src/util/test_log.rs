// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Log capturing for unit tests.
//!
//! Records are stored per thread: the test harness runs every test on its own thread, so
//! parallel tests don't see each other's log output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

/// Install the capturing logger and clear the records of the current thread.
pub(crate) fn capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("Another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Messages logged on the current thread at `level` or more severe.
pub(crate) fn messages(level: Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l <= level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
