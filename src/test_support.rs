//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::{Cell, RefCell};
use std::io::Cursor;
use std::rc::Rc;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::core::screen::Screen;
use crate::core::session::Session;

pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// A session that reads `input` and captures output in memory.
/// The screen never clears; swap in a `RecordingScreen` to observe it.
pub fn scripted(input: &str) -> ScriptedSession {
    Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
        .with_screen(crate::core::screen::NoopScreen)
}

/// Like `scripted`, for input that is not valid UTF-8.
pub fn scripted_bytes(input: &[u8]) -> ScriptedSession {
    Session::new(Cursor::new(input.to_vec()), Vec::new())
        .with_screen(crate::core::screen::NoopScreen)
}

/// Everything written to the session's output so far.
pub fn output(session: &ScriptedSession) -> String {
    String::from_utf8_lossy(session.writer()).into_owned()
}

/// Counts clears instead of touching the terminal.
pub struct RecordingScreen {
    clears: Rc<Cell<usize>>,
}

impl RecordingScreen {
    /// Returns the screen and a handle to its clear counter.
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let clears = Rc::new(Cell::new(0));
        (
            Self {
                clears: Rc::clone(&clears),
            },
            clears,
        )
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) {
        self.clears.set(self.clears.get() + 1);
    }
}

// ============================================================================
// Log capture
// ============================================================================

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Stores records per thread, so parallel tests never see each other's logs.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Runs `f` and returns its result with the log records it emitted at
/// `level` or more severe.
pub fn capture_logs<T>(level: Level, f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let records: Vec<(Level, String)> = RECORDS.with(|r| {
        r.borrow_mut()
            .drain(..)
            .filter(|(l, _)| *l <= level)
            .collect()
    });
    (out, records)
}
