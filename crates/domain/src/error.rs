use crate::{ExerciseID, Revision, RoutineID};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("conflict (expected revision {expected}, found {found})")]
    Conflict { expected: Revision, found: Revision },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

macro_rules! impl_from_read_and_write_error {
    ($error: ident) => {
        impl From<ReadError> for $error {
            fn from(value: ReadError) -> Self {
                match value {
                    ReadError::Decode(decode) => $error::Decode(decode),
                    ReadError::Storage(storage) => $error::Storage(storage),
                    ReadError::Other(other) => $error::Other(other),
                }
            }
        }

        impl From<WriteError> for $error {
            fn from(value: WriteError) -> Self {
                match value {
                    WriteError::Conflict { .. } => $error::Conflict,
                    WriteError::Storage(storage) => $error::Storage(storage),
                }
            }
        }
    };
}

impl_from_read_and_write_error!(CreateError);
impl_from_read_and_write_error!(UpdateError);
impl_from_read_and_write_error!(DeleteError);

/// A persisted value exists but cannot be parsed.
///
/// Treating this like an absent value would overwrite the user's data on the next write.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to decode stored {key}: {message}")]
pub struct DecodeError {
    pub key: String,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Routine not found")]
    Routine(RoutineID),
    #[error("Exercise not found")]
    Exercise(ExerciseID),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Missing(&'static str),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
