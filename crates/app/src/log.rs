use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub const MAX_ENTRIES: usize = 100;

pub trait Repository: Send + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// The most recent log entries, newest first.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: VecDeque<Entry>,
}

impl Repository for MemoryLog {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self.entries.clone())
    }

    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        self.entries.push_front(entry);
        self.entries.truncate(MAX_ENTRIES);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl Logger {
    fn entry(record: &Record) -> Entry {
        Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Self::entry(record);
        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);

        if let Ok(log) = LOG.lock() {
            if let Some(ref repository) = *log {
                if let Ok(mut repository) = repository.lock() {
                    let _ = repository.write_entry(entry);
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Mar 01 18:30:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_log_newest_first() {
        let mut log = MemoryLog::default();
        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();
        assert_eq!(
            log.read_entries().unwrap(),
            VecDeque::from([entry("b"), entry("a")])
        );
    }

    #[test]
    fn test_memory_log_capacity() {
        let mut log = MemoryLog::default();
        for i in 0..=MAX_ENTRIES {
            log.write_entry(entry(&i.to_string())).unwrap();
        }
        let entries = log.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_entry_serialization() {
        let value = serde_json::to_value(entry("saved")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "time": "Mar 01 18:30:00",
                "level": "Info",
                "message": "saved"
            })
        );
        assert_eq!(serde_json::from_value::<Entry>(value).unwrap(), entry("saved"));
    }

    #[test]
    fn test_logger_entry() {
        let entry = Logger::entry(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("failed to {} {}", "create", "routine"))
                .build(),
        );
        assert_eq!(entry.level, Level::Warn);
        assert_eq!(entry.message, "failed to create routine");
        assert_eq!(entry.time.len(), "Mar 01 18:30:00".len());
    }
}
