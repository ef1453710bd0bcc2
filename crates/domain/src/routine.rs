use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Exercise, ExerciseDraft, ExerciseID, Name, ReadError, Reps, Sets,
    StorageError, UpdateError, ValidationError, Weight, WriteError,
};

#[allow(async_fn_in_trait)]
pub trait RoutineService {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn get_routine(&self, id: &RoutineID) -> Result<Option<Routine>, ReadError>;
    async fn get_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<Exercise>, ReadError>;
    async fn create_routine(&self, name: Name) -> Result<Routine, CreateError>;
    async fn rename_routine(&self, id: &RoutineID, name: Name) -> Result<Routine, UpdateError>;
    async fn delete_routine(&self, id: &RoutineID) -> Result<RoutineID, DeleteError>;
    async fn create_exercise(
        &self,
        routine_id: &RoutineID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, CreateError>;
    async fn replace_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, UpdateError>;
    async fn delete_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
    ) -> Result<ExerciseID, DeleteError>;

    fn validate_routine_name(&self, name: &str) -> Result<Name, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Missing("Name"));
        }
        Name::new(name).map_err(|err| ValidationError::Other(err.into()))
    }

    /// Checks the raw input of an exercise form.
    ///
    /// Every field except the video link is required.
    fn validate_exercise(
        &self,
        name: &str,
        sets: &str,
        reps: &str,
        weight: &str,
        youtube_link: &str,
    ) -> Result<ExerciseDraft, ValidationError> {
        for (field, value) in [
            ("Name", name),
            ("Sets", sets),
            ("Reps", reps),
            ("Weight", weight),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }
        let youtube_link = youtube_link.trim();
        Ok(ExerciseDraft {
            name: Name::new(name).map_err(|err| ValidationError::Other(err.into()))?,
            sets: Sets::try_from(sets).map_err(|err| ValidationError::Other(err.into()))?,
            reps: Reps::try_from(reps).map_err(|err| ValidationError::Other(err.into()))?,
            weight: Weight::new(weight).map_err(|err| ValidationError::Other(err.into()))?,
            youtube_link: (!youtube_link.is_empty()).then(|| youtube_link.to_string()),
        })
    }
}

/// Whole-collection persistence of all routines.
///
/// Every mutation reads the entire collection, changes it in memory and writes the entire
/// collection back. There is no locking. Two writers that both load before either saves lose
/// the first writer's change with [`save_all`](Self::save_all); [`save_snapshot`](Self::save_snapshot)
/// reports such a stale write as a conflict instead.
#[allow(async_fn_in_trait)]
pub trait RoutineRepository {
    /// Reads all routines. An absent value yields an empty collection.
    async fn load_all(&self) -> Result<Vec<Routine>, ReadError> {
        Ok(self.load_snapshot().await?.routines)
    }

    /// Replaces the persisted collection unconditionally.
    async fn save_all(&self, routines: &[Routine]) -> Result<Revision, StorageError>;

    async fn load_snapshot(&self) -> Result<Snapshot, ReadError>;

    /// Replaces the persisted collection if it is still at revision `base`.
    ///
    /// The check and the write are separate store calls, so the check is best effort.
    async fn save_snapshot(
        &self,
        base: Revision,
        routines: &[Routine],
    ) -> Result<Revision, WriteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub exercises: Vec<Exercise>,
}

impl Routine {
    /// Creates an empty routine with a fresh id.
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: RoutineID::generate(),
            name,
            exercises: vec![],
        }
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == *id)
    }
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoutineID(String);

impl RoutineID {
    /// Time-ordered id with random bits, distinct even for routines created within the same
    /// millisecond.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutineID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RoutineID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Write counter of the persisted routine collection.
#[derive(Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for Revision {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Revision> for u64 {
    fn from(value: Revision) -> Self {
        value.0
    }
}

/// The routine collection together with the revision it was read at.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub routines: Vec<Routine>,
    pub revision: Revision,
}
