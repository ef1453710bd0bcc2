use log::{debug, error};

use crate::{
    CreateError, DeleteError, Exercise, ExerciseDraft, ExerciseID, Name, NotFoundError, ReadError,
    Routine, RoutineID, RoutineRepository, RoutineService, UpdateError, Workout,
    WorkoutRepository, WorkoutService, collection,
};

/// Entry point for the screens.
///
/// Every mutation loads a snapshot of the whole routine collection, applies one transformation
/// and writes the collection back against the revision it was loaded at. A write that lost a
/// race against another writer fails with a conflict instead of discarding the other change.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: RoutineRepository> Service<R> {
    async fn insert_routine(&self, name: Name) -> Result<Routine, CreateError> {
        let snapshot = self.repository.load_snapshot().await?;
        let routine = Routine::new(name);
        let routines = collection::upsert_routine(&snapshot.routines, routine.clone());
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(routine)
    }

    async fn update_routine_name(&self, id: &RoutineID, name: Name) -> Result<Routine, UpdateError> {
        let snapshot = self.repository.load_snapshot().await?;
        let mut routine = collection::find_routine(&snapshot.routines, id)
            .cloned()
            .ok_or_else(|| NotFoundError::Routine(id.clone()))?;
        routine.name = name;
        let routines = collection::upsert_routine(&snapshot.routines, routine.clone());
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(routine)
    }

    async fn remove_routine(&self, id: &RoutineID) -> Result<RoutineID, DeleteError> {
        let snapshot = self.repository.load_snapshot().await?;
        if collection::find_routine(&snapshot.routines, id).is_none() {
            return Err(NotFoundError::Routine(id.clone()).into());
        }
        let routines = collection::remove_routine(&snapshot.routines, id);
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(id.clone())
    }

    async fn insert_exercise(
        &self,
        routine_id: &RoutineID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, CreateError> {
        let snapshot = self.repository.load_snapshot().await?;
        if collection::find_routine(&snapshot.routines, routine_id).is_none() {
            return Err(NotFoundError::Routine(routine_id.clone()).into());
        }
        let exercise = Exercise::new(draft);
        let routines =
            collection::upsert_exercise(&snapshot.routines, routine_id, exercise.clone());
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(exercise)
    }

    async fn update_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, UpdateError> {
        let snapshot = self.repository.load_snapshot().await?;
        let routine = collection::find_routine(&snapshot.routines, routine_id)
            .ok_or_else(|| NotFoundError::Routine(routine_id.clone()))?;
        if routine.exercise(exercise_id).is_none() {
            return Err(NotFoundError::Exercise(exercise_id.clone()).into());
        }
        let exercise = Exercise::with_id(exercise_id.clone(), draft);
        let routines =
            collection::upsert_exercise(&snapshot.routines, routine_id, exercise.clone());
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(exercise)
    }

    async fn remove_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
    ) -> Result<ExerciseID, DeleteError> {
        let snapshot = self.repository.load_snapshot().await?;
        let routine = collection::find_routine(&snapshot.routines, routine_id)
            .ok_or_else(|| NotFoundError::Routine(routine_id.clone()))?;
        if routine.exercise(exercise_id).is_none() {
            return Err(NotFoundError::Exercise(exercise_id.clone()).into());
        }
        let routines = collection::remove_exercise(&snapshot.routines, routine_id, exercise_id);
        self.repository
            .save_snapshot(snapshot.revision, &routines)
            .await?;
        Ok(exercise_id.clone())
    }
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(self.repository.load_all(), ReadError, "get", "routines")
    }

    async fn get_routine(&self, id: &RoutineID) -> Result<Option<Routine>, ReadError> {
        let routines = self.get_routines().await?;
        Ok(collection::find_routine(&routines, id).cloned())
    }

    async fn get_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<Exercise>, ReadError> {
        let routines = self.get_routines().await?;
        Ok(collection::find_exercise(&routines, routine_id, exercise_id).cloned())
    }

    async fn create_routine(&self, name: Name) -> Result<Routine, CreateError> {
        log_on_error!(self.insert_routine(name), CreateError, "create", "routine")
    }

    async fn rename_routine(&self, id: &RoutineID, name: Name) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.update_routine_name(id, name),
            UpdateError,
            "rename",
            "routine"
        )
    }

    async fn delete_routine(&self, id: &RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(self.remove_routine(id), DeleteError, "delete", "routine")
    }

    async fn create_exercise(
        &self,
        routine_id: &RoutineID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.insert_exercise(routine_id, draft),
            CreateError,
            "create",
            "exercise"
        )
    }

    async fn replace_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
        draft: ExerciseDraft,
    ) -> Result<Exercise, UpdateError> {
        log_on_error!(
            self.update_exercise(routine_id, exercise_id, draft),
            UpdateError,
            "replace",
            "exercise"
        )
    }

    async fn delete_exercise(
        &self,
        routine_id: &RoutineID,
        exercise_id: &ExerciseID,
    ) -> Result<ExerciseID, DeleteError> {
        log_on_error!(
            self.remove_exercise(routine_id, exercise_id),
            DeleteError,
            "delete",
            "exercise"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn record_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "record",
            "workout"
        )
    }
}
