use gymbook_domain as domain;
use log::error;

use crate::{Settings, SettingsRepository, SettingsService};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, domain::ReadError> {
        self.repository
            .read_settings()
            .await
            .inspect_err(|err| error!("failed to read settings: {err}"))
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), domain::StorageError> {
        self.repository
            .write_settings(settings)
            .await
            .inspect_err(|err| error!("failed to write settings: {err}"))
    }
}
