use std::fmt;

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Name, VideoID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
    pub youtube_link: Option<String>,
}

impl Exercise {
    /// Creates an exercise with a fresh id.
    #[must_use]
    pub fn new(draft: ExerciseDraft) -> Self {
        Self::with_id(ExerciseID::generate(), draft)
    }

    #[must_use]
    pub fn with_id(id: ExerciseID, draft: ExerciseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            sets: draft.sets,
            reps: draft.reps,
            weight: draft.weight,
            youtube_link: draft.youtube_link,
        }
    }

    /// The demonstration video, if the stored link points to one.
    #[must_use]
    pub fn video_id(&self) -> Option<VideoID> {
        self.youtube_link.as_deref().and_then(VideoID::from_url)
    }
}

/// Validated user input for creating or replacing an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: Name,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
    pub youtube_link: Option<String>,
}

impl From<Exercise> for ExerciseDraft {
    fn from(value: Exercise) -> Self {
        Self {
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            youtube_link: value.youtube_link,
        }
    }
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Number of sets.
///
/// Input is always a positive number. Stored data may lack a usable count, which reads as
/// [`Sets::UNKNOWN`] and is displayed as `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(Option<u32>);

impl Sets {
    pub const UNKNOWN: Self = Self(None);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::Zero);
        }

        Ok(Self(Some(value)))
    }

    #[must_use]
    pub fn value(self) -> Option<u32> {
        self.0
    }
}

impl fmt::Display for Sets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_count(self.0, f)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SetsError {
    #[error("Sets must be greater than zero")]
    Zero,
    #[error("Sets must be a whole number")]
    ParseError,
}

/// Number of repetitions per set. Like [`Sets`], it may be unknown in stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(Option<u32>);

impl Reps {
    pub const UNKNOWN: Self = Self(None);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::Zero);
        }

        Ok(Self(Some(value)))
    }

    #[must_use]
    pub fn value(self) -> Option<u32> {
        self.0
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_count(self.0, f)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RepsError {
    #[error("Reps must be greater than zero")]
    Zero,
    #[error("Reps must be a whole number")]
    ParseError,
}

fn fmt_count(count: Option<u32>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match count {
        Some(count) => write!(f, "{count}"),
        None => f.write_str("?"),
    }
}

/// Free-form load, e.g. `60`, `60 kg` or `20-25`.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub struct Weight(String);

impl Weight {
    pub fn new(value: &str) -> Result<Self, WeightError> {
        let trimmed_value = value.trim();

        if trimmed_value.is_empty() {
            return Err(WeightError::Empty);
        }

        Ok(Self(trimmed_value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Placeholder for a weight that is missing in stored data.
impl Default for Weight {
    fn default() -> Self {
        Self("?".to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    #[error("Weight must not be empty")]
    Empty,
}
