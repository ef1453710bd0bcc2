#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use gymbook_domain::{self as domain, RoutineRepository, WorkoutRepository};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod file;
pub mod memory;
pub mod routine_store;
pub mod workout_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use routine_store::RoutineStore;
pub use workout_store::WorkoutStore;

/// All repositories of the domain service, backed by one key-value store.
#[derive(Clone, Debug)]
pub struct Storage<S> {
    routines: RoutineStore<S>,
    workouts: WorkoutStore<S>,
}

impl<S: Clone> Storage<S> {
    pub fn new(store: S) -> Self {
        Self {
            routines: RoutineStore::new(store.clone()),
            workouts: WorkoutStore::new(store),
        }
    }
}

impl<S: KeyValueStore> domain::RoutineRepository for Storage<S> {
    async fn load_all(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        self.routines.load_all().await
    }

    async fn save_all(
        &self,
        routines: &[domain::Routine],
    ) -> Result<domain::Revision, domain::StorageError> {
        self.routines.save_all(routines).await
    }

    async fn load_snapshot(&self) -> Result<domain::Snapshot, domain::ReadError> {
        self.routines.load_snapshot().await
    }

    async fn save_snapshot(
        &self,
        base: domain::Revision,
        routines: &[domain::Routine],
    ) -> Result<domain::Revision, domain::WriteError> {
        self.routines.save_snapshot(base, routines).await
    }
}

impl<S: KeyValueStore> domain::WorkoutRepository for Storage<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        self.workouts.read_workouts().await
    }

    async fn create_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        self.workouts.create_workout(workout).await
    }
}

/// String-keyed persistent store holding one text value per key.
///
/// A `set` replaces the whole value. There are no transactions and no partial writes.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError>;
}

/// Fixed keys of all persisted values.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "routines")]
    Routines,
    #[strum(serialize = "routines.revision")]
    RoutinesRevision,
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "settings")]
    Settings,
}

/// Reads and parses the JSON value stored under `key`.
///
/// An absent or blank value is `None`. A present value that does not parse is a decode error
/// and must not be mistaken for an absent one.
pub async fn read_json<S, T>(store: &S, key: Key) -> Result<Option<T>, domain::ReadError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key.as_ref()).await? {
        Some(value) if !value.trim().is_empty() => serde_json::from_str(&value)
            .map(Some)
            .map_err(|err| decode_error(key, &err).into()),
        _ => Ok(None),
    }
}

pub async fn write_json<S, T>(store: &S, key: Key, value: &T) -> Result<(), domain::StorageError>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let value = serde_json::to_string(value).map_err(|err| domain::StorageError::Other(err.into()))?;
    store.set(key.as_ref(), value).await
}

pub(crate) fn decode_error(key: Key, err: &dyn std::error::Error) -> domain::DecodeError {
    domain::DecodeError {
        key: key.as_ref().to_string(),
        message: err.to_string(),
    }
}
