//! View models of the screens.
//!
//! A screen reads everything it shows from the store when it gains focus and holds no state that
//! outlives it. Every failure ends up as an [`Alert`] on the screen that caused it.

use std::fmt::Display;

use gymbook_domain as domain;

pub mod exercise_detail;
pub mod exercise_form;
pub mod home;
pub mod routine_detail;
pub mod routine_form;
pub mod routines;
pub mod workout;
pub mod workout_history;

pub use exercise_detail::ExerciseDetailScreen;
pub use exercise_form::ExerciseFormScreen;
pub use home::HomeScreen;
pub use routine_detail::RoutineDetailScreen;
pub use routine_form::RoutineFormScreen;
pub use routines::RoutinesScreen;
pub use workout::WorkoutScreen;
pub use workout_history::WorkoutHistoryScreen;

const CONFLICT_MESSAGE: &str = "The data has been changed in the meantime. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    fn failure(action: &str, err: &impl Display) -> Self {
        Self::error(format!("Failed to {action}. {err}"))
    }
}

/// Data of a screen that refers to an entity by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<T> {
    Loading,
    Ready(T),
    NotFound,
}

impl<T> Content<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Content::Ready(value) => Some(value),
            Content::Loading | Content::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Content<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Content::Ready(value),
            None => Content::NotFound,
        }
    }
}

/// A delete that waits for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    pub title: &'static str,
    pub message: &'static str,
    pub target: T,
}

pub trait IntoAlert {
    fn into_alert(self, action: &str) -> Alert;
}

impl IntoAlert for domain::ReadError {
    fn into_alert(self, action: &str) -> Alert {
        Alert::failure(action, &self)
    }
}

impl IntoAlert for domain::ValidationError {
    fn into_alert(self, _: &str) -> Alert {
        Alert::error(format!("{self}."))
    }
}

macro_rules! impl_into_alert {
    ($error: ident) => {
        impl IntoAlert for domain::$error {
            fn into_alert(self, action: &str) -> Alert {
                match self {
                    domain::$error::NotFound(err) => Alert::error(format!("{err}.")),
                    domain::$error::Conflict => Alert::error(CONFLICT_MESSAGE),
                    err => Alert::failure(action, &err),
                }
            }
        }
    };
}

impl_into_alert!(CreateError);
impl_into_alert!(UpdateError);
impl_into_alert!(DeleteError);
