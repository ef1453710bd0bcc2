use chrono::{DateTime, Duration, Local};
use gymbook_domain as domain;

use crate::{
    Key, KeyValueStore, decode_error, read_json,
    routine_store::Routine,
    write_json,
};

/// Workout history, appended to whenever a workout is finished.
#[derive(Clone, Debug)]
pub struct WorkoutStore<S> {
    store: S,
}

impl<S> WorkoutStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> domain::WorkoutRepository for WorkoutStore<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(read_json::<_, Vec<Workout>>(&self.store, Key::Workouts)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Workout::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| decode_error(Key::Workouts, &err))?)
    }

    async fn create_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = read_json::<_, Vec<Workout>>(&self.store, Key::Workouts)
            .await?
            .unwrap_or_default();
        workouts.push(Workout::from(&workout));
        write_json(&self.store, Key::Workouts, &workouts).await?;
        Ok(workout)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: String,
    pub routine: Routine,
    pub date: String,
    pub duration: i64,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            routine: Routine::from(&value.routine),
            date: value.date.to_rfc3339(),
            duration: value.duration.num_seconds(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = EntryError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            routine: domain::Routine::from(value.routine),
            date: DateTime::parse_from_rfc3339(&value.date)
                .map_err(|err| EntryError::InvalidDate(err.to_string()))?
                .with_timezone(&Local),
            duration: Duration::seconds(value.duration),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EntryError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use gymbook_domain::WorkoutRepository;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{MemoryStore, tests::data::WORKOUT};

    use super::*;

    #[test]
    fn test_workout_try_from() {
        assert_eq!(
            domain::Workout::try_from(Workout::from(&*WORKOUT)),
            Ok(WORKOUT.clone())
        );
    }

    #[test]
    fn test_workout_try_from_invalid_date() {
        let workout = Workout {
            date: "yesterday".to_string(),
            ..Workout::from(&*WORKOUT)
        };
        assert!(matches!(
            domain::Workout::try_from(workout),
            Err(EntryError::InvalidDate(_))
        ));
    }

    #[tokio::test]
    async fn test_create_and_read_workouts() {
        let store = WorkoutStore::new(MemoryStore::new());
        assert_eq!(store.read_workouts().await.unwrap(), vec![]);
        store.create_workout(WORKOUT.clone()).await.unwrap();
        store.create_workout(WORKOUT.clone()).await.unwrap();
        assert_eq!(
            store.read_workouts().await.unwrap(),
            vec![WORKOUT.clone(), WORKOUT.clone()]
        );
    }

    #[tokio::test]
    async fn test_create_workout_keeps_malformed_history() {
        let kv = MemoryStore::new();
        kv.set("workouts", json!({ "id": 1 }).to_string())
            .await
            .unwrap();
        let store = WorkoutStore::new(kv.clone());
        assert!(matches!(
            store.create_workout(WORKOUT.clone()).await,
            Err(domain::CreateError::Decode(_))
        ));
        assert_eq!(
            kv.get("workouts").await.unwrap(),
            Some(json!({ "id": 1 }).to_string())
        );
    }
}
