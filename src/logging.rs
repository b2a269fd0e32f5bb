use log::{Level, LevelFilter, Log, Record};
use std::fmt;
use std::sync::Arc;

const TARGET: &str = "duckdns";

/// Logger handed to each component instead of the process-wide `log` logger.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<dyn Log>,
}

impl Logger {
    pub fn new(inner: Arc<dyn Log>) -> Self {
        Self { inner }
    }

    /// Builds an `env_logger` backed logger. `RUST_LOG` is applied on top of
    /// the level chosen by the debug flag.
    pub fn from_debug_flag(debug: bool) -> Self {
        let level = if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let logger = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .build();

        Self::new(Arc::new(logger))
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = Record::builder()
            .args(args)
            .level(level)
            .target(TARGET)
            .build();

        if self.inner.enabled(record.metadata()) {
            self.inner.log(&record);
        }
    }
}
