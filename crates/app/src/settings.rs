use gymbook_domain as domain;
use gymbook_storage::{Key, KeyValueStore, read_json, write_json};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, domain::ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<(), domain::StorageError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, domain::ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<(), domain::StorageError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub autoplay_video: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kilogram,
            autoplay_video: false,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilogram,
    Pound,
}

impl WeightUnit {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }
}

/// Settings persisted as JSON object next to the routines.
#[derive(Clone, Debug)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> SettingsRepository for SettingsStore<S> {
    async fn read_settings(&self) -> Result<Settings, domain::ReadError> {
        Ok(read_json::<_, Settings>(&self.store, Key::Settings)
            .await?
            .unwrap_or_default())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), domain::StorageError> {
        write_json(&self.store, Key::Settings, &settings).await
    }
}
