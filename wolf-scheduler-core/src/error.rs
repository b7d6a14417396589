use thiserror::Error;

/// Default message carried by a [`ConflictError`].
pub const SCHEDULE_CONFLICT: &str = "Schedule conflict.";

/// Raised when two activities share a meeting day and their times overlap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConflictError {
    message: String,
}

impl ConflictError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ConflictError {
    fn default() -> Self {
        Self::new(SCHEDULE_CONFLICT)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A value failed validation, or a scheduler operation was rejected.
    #[error("{message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV record failed: {0:?}")]
    Csv(csv::ErrorKind),
}

/// I/O failures inside the CSV reader or writer surface as [`Error::Io`].
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io(source),
            kind => Self::Csv(kind),
        }
    }
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    /// Translates an I/O failure into the invalid-argument vocabulary.
    pub fn invalid_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
