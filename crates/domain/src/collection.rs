//! Pure transformations of the routine collection.
//!
//! These functions are the in-memory half of every mutation: load the collection, apply exactly
//! one transformation, save the collection. They never reorder unrelated entries. An unknown
//! id leaves the collection unchanged, callers that need to report it check with
//! [`find_routine`] or [`find_exercise`] first.

use crate::{Exercise, ExerciseID, Routine, RoutineID};

/// Replaces the routine with the same id, or appends it.
#[must_use]
pub fn upsert_routine(routines: &[Routine], routine: Routine) -> Vec<Routine> {
    let mut result = routines.to_vec();
    match result.iter_mut().find(|r| r.id == routine.id) {
        Some(existing) => *existing = routine,
        None => result.push(routine),
    }
    result
}

#[must_use]
pub fn remove_routine(routines: &[Routine], routine_id: &RoutineID) -> Vec<Routine> {
    routines
        .iter()
        .filter(|r| r.id != *routine_id)
        .cloned()
        .collect()
}

/// Replaces the exercise with the same id inside the given routine, or appends it there.
#[must_use]
pub fn upsert_exercise(
    routines: &[Routine],
    routine_id: &RoutineID,
    exercise: Exercise,
) -> Vec<Routine> {
    let mut result = routines.to_vec();
    if let Some(routine) = result.iter_mut().find(|r| r.id == *routine_id) {
        match routine.exercises.iter_mut().find(|e| e.id == exercise.id) {
            Some(existing) => *existing = exercise,
            None => routine.exercises.push(exercise),
        }
    }
    result
}

#[must_use]
pub fn remove_exercise(
    routines: &[Routine],
    routine_id: &RoutineID,
    exercise_id: &ExerciseID,
) -> Vec<Routine> {
    let mut result = routines.to_vec();
    if let Some(routine) = result.iter_mut().find(|r| r.id == *routine_id) {
        routine.exercises.retain(|e| e.id != *exercise_id);
    }
    result
}

#[must_use]
pub fn find_routine<'a>(routines: &'a [Routine], routine_id: &RoutineID) -> Option<&'a Routine> {
    routines.iter().find(|r| r.id == *routine_id)
}

#[must_use]
pub fn find_exercise<'a>(
    routines: &'a [Routine],
    routine_id: &RoutineID,
    exercise_id: &ExerciseID,
) -> Option<&'a Exercise> {
    find_routine(routines, routine_id)?.exercise(exercise_id)
}
