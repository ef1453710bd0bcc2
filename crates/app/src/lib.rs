#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{
    rc::Rc,
    sync::{Arc, Mutex},
};

use gymbook_domain as domain;
use gymbook_storage::{self as storage, FileStore};

pub mod config;
pub mod log;
pub mod navigation;
pub mod screen;
mod service;
mod settings;

pub use config::{Config, ConfigError};
pub use navigation::{Navigator, Route};
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, SettingsStore, WeightUnit};

/// Services shared by all screens, backed by one key-value store.
pub struct Context<S> {
    pub domain: domain::Service<storage::Storage<S>>,
    pub app: Service<SettingsStore<S>>,
}

impl<S: Clone> Context<S> {
    pub fn new(store: S) -> Self {
        Self {
            domain: domain::Service::new(storage::Storage::new(store.clone())),
            app: Service::new(SettingsStore::new(store)),
        }
    }
}

/// Initializes logging and opens the data directory of `config`.
pub fn start(config: &Config) -> Result<Rc<Context<FileStore>>, ::log::SetLoggerError> {
    log::init(
        Arc::new(Mutex::new(log::MemoryLog::default())),
        config.log_level,
    )?;
    ::log::info!("using data directory {}", config.data_dir.display());
    Ok(Rc::new(Context::new(FileStore::new(config.data_dir.clone()))))
}
