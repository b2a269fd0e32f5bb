
use crate::logging::Logger;
use log::{Level, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Keeps every record so tests can assert on what was logged.
#[derive(Default)]
pub struct CaptureLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLog {
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Log for CaptureLog {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn capture_logger() -> (Logger, Arc<CaptureLog>) {
    let capture = Arc::new(CaptureLog::default());
    (Logger::new(capture.clone()), capture)
}
