#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod collection;
mod error;
mod exercise;
mod name;
mod routine;
mod service;
mod video;
mod workout;

pub use collection::{
    find_exercise, find_routine, remove_exercise, remove_routine, upsert_exercise, upsert_routine,
};
pub use error::{
    CreateError, DecodeError, DeleteError, NotFoundError, ReadError, StorageError, UpdateError,
    ValidationError, WriteError,
};
pub use exercise::{
    Exercise, ExerciseDraft, ExerciseID, Reps, RepsError, Sets, SetsError, Weight, WeightError,
};
pub use name::{Name, NameError};
pub use routine::{Revision, Routine, RoutineID, RoutineRepository, RoutineService, Snapshot};
pub use service::Service;
pub use video::VideoID;
pub use workout::{
    Stopwatch, Workout, WorkoutID, WorkoutRepository, WorkoutService, format_duration,
};
