use gymbook_domain as domain;
use serde::Deserialize;

use crate::{Key, KeyValueStore, read_json, write_json};

/// Persists the whole routine collection as one JSON array under [`Key::Routines`].
///
/// A write counter is kept under [`Key::RoutinesRevision`] so that the array itself keeps the
/// plain format of earlier versions.
#[derive(Clone, Debug)]
pub struct RoutineStore<S> {
    store: S,
}

impl<S> RoutineStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> RoutineStore<S> {
    /// An absent or unparsable counter counts as revision 0.
    async fn read_revision(&self) -> Result<domain::Revision, domain::StorageError> {
        Ok(self
            .store
            .get(Key::RoutinesRevision.as_ref())
            .await?
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(domain::Revision::from)
            .unwrap_or_default())
    }

    /// The counter is bumped before the routines are written. If the second write fails, the
    /// stored routines are unchanged and writers holding the old revision get a conflict.
    async fn write(
        &self,
        revision: domain::Revision,
        routines: &[domain::Routine],
    ) -> Result<domain::Revision, domain::StorageError> {
        let routines = routines.iter().map(Routine::from).collect::<Vec<_>>();
        let next = revision.next();
        self.store
            .set(Key::RoutinesRevision.as_ref(), next.to_string())
            .await?;
        write_json(&self.store, Key::Routines, &routines).await?;
        Ok(next)
    }
}

impl<S: KeyValueStore> domain::RoutineRepository for RoutineStore<S> {
    async fn save_all(
        &self,
        routines: &[domain::Routine],
    ) -> Result<domain::Revision, domain::StorageError> {
        let revision = self.read_revision().await?;
        self.write(revision, routines).await
    }

    async fn load_snapshot(&self) -> Result<domain::Snapshot, domain::ReadError> {
        let revision = self.read_revision().await?;
        let routines = read_json::<_, Vec<Routine>>(&self.store, Key::Routines)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Routine::from)
            .collect();
        Ok(domain::Snapshot { routines, revision })
    }

    async fn save_snapshot(
        &self,
        base: domain::Revision,
        routines: &[domain::Routine],
    ) -> Result<domain::Revision, domain::WriteError> {
        let found = self.read_revision().await?;
        if found != base {
            return Err(domain::WriteError::Conflict {
                expected: base,
                found,
            });
        }
        Ok(self.write(found, routines).await?)
    }
}

/// Stored routine.
///
/// Entries written by earlier versions may lack fields or carry `null` values. Those are read
/// with placeholders instead of rejecting the whole collection, so the entry can still be
/// repaired or deleted.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Exercise>,
}

impl From<&domain::Routine> for Routine {
    fn from(value: &domain::Routine) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl From<Routine> for domain::Routine {
    fn from(value: Routine) -> Self {
        Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name).unwrap_or_default(),
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::from)
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub sets: Count,
    #[serde(default)]
    pub reps: Count,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub youtube_link: String,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            sets: Count::from(value.sets.value()),
            reps: Count::from(value.reps.value()),
            weight: value.weight.to_string(),
            youtube_link: value.youtube_link.clone().unwrap_or_default(),
        }
    }
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        let youtube_link = value.youtube_link.trim();
        Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name).unwrap_or_default(),
            sets: value
                .sets
                .value()
                .and_then(|sets| domain::Sets::new(sets).ok())
                .unwrap_or(domain::Sets::UNKNOWN),
            reps: value
                .reps
                .value()
                .and_then(|reps| domain::Reps::new(reps).ok())
                .unwrap_or(domain::Reps::UNKNOWN),
            weight: domain::Weight::new(&value.weight).unwrap_or_default(),
            youtube_link: (!youtube_link.is_empty()).then(|| youtube_link.to_string()),
        }
    }
}

/// Sets or reps, written as a number but also accepted as a numeric string.
///
/// Any other value, e.g. `null`, a negative number or a fraction, is kept as an unknown count.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Count {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Count {
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Count::Number(number) => u32::try_from(*number).ok(),
            Count::Text(text) => text.trim().parse::<u32>().ok(),
            Count::Other(_) => None,
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::Other(serde_json::Value::Null)
    }
}

impl From<Option<u32>> for Count {
    fn from(value: Option<u32>) -> Self {
        value.map_or_else(Count::default, |count| Count::Number(count.into()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
