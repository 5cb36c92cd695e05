//! Error types for the roadmap library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskField;

/// Coarse classification of every failure the client can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed or the server answered with a non-2xx
    /// status.
    Transport,
    /// The server answered 2xx but the body carried an error or could not be
    /// understood.
    Semantic,
    /// The input was rejected locally before any request was issued.
    Validation,
}

/// The underlying cause of a failed request.
#[derive(Error, Debug)]
pub enum Failure {
    /// Network-level failure (DNS, refused connection, reset, ...)
    #[error("request could not be completed: {message}")]
    Network { message: String },
    /// Non-success HTTP status
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// Successful status carrying an embedded `error` field
    #[error("server reported an error: {message}")]
    Reported { message: String },
    /// Successful status whose body does not have the expected shape
    #[error("unexpected response body: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl Failure {
    /// Classify the failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Network { .. } | Failure::Status { .. } => FailureKind::Transport,
            Failure::Reported { .. } | Failure::Malformed { .. } => FailureKind::Semantic,
        }
    }
}

/// What a failed update was trying to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    /// The goal's objective, sent as a full document replace
    Objective,
    /// A whole task, sent as a full document replace
    Task,
    /// A single task field, sent through the detail patch
    TaskField(TaskField),
    /// A task's completion flag
    Completion,
    /// An unsaved, freshly generated plan
    Draft,
}

impl fmt::Display for UpdateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateTarget::Objective => write!(f, "goal objective"),
            UpdateTarget::Task => write!(f, "task"),
            UpdateTarget::TaskField(field) => write!(f, "task {field}"),
            UpdateTarget::Completion => write!(f, "task completion status"),
            UpdateTarget::Draft => write!(f, "plan"),
        }
    }
}

/// Comprehensive error type for all sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Plan generation failed; `message` is what the user should see
    #[error("{message}")]
    Generation {
        message: String,
        #[source]
        cause: Failure,
    },
    /// The store refused to return the goal (missing or owned by someone else)
    #[error("Failed to fetch goal details for '{goal_id}'")]
    NotFoundOrUnauthorized {
        goal_id: String,
        #[source]
        cause: Failure,
    },
    /// The goal history could not be loaded
    #[error("Failed to fetch goals")]
    HistoryFailed {
        #[source]
        cause: Failure,
    },
    /// An update request was not accepted
    #[error("Failed to update {target}")]
    UpdateFailed {
        target: UpdateTarget,
        #[source]
        cause: Failure,
    },
    /// A goal or task deletion was not accepted
    #[error("Failed to delete {target}")]
    DeleteFailed {
        target: &'static str,
        #[source]
        cause: Failure,
    },
    /// The progress endpoint was unreachable or returned an unusable body
    #[error("Progress for goal '{goal_id}' is unavailable")]
    ProgressUnavailable {
        goal_id: String,
        #[source]
        cause: Failure,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SyncError {
        SyncError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for update errors.
pub struct UpdateFailedBuilder {
    target: UpdateTarget,
}

impl UpdateFailedBuilder {
    /// Build the error with the underlying failure.
    pub fn with_cause(self, cause: Failure) -> SyncError {
        SyncError::UpdateFailed {
            target: self.target,
            cause,
        }
    }
}

impl SyncError {
    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a builder for update errors.
    pub fn update_failed(target: UpdateTarget) -> UpdateFailedBuilder {
        UpdateFailedBuilder { target }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        SyncError::Configuration {
            message: message.into(),
        }
    }

    /// Generation error carrying the message a user should see for `cause`.
    pub(crate) fn generation(cause: Failure) -> Self {
        let message = match &cause {
            Failure::Network { .. } => "Failed to connect to the server".to_string(),
            Failure::Reported { message } => message.clone(),
            Failure::Status { .. } | Failure::Malformed { .. } => {
                "Failed to generate plan".to_string()
            }
        };
        SyncError::Generation { message, cause }
    }

    /// Which part of the taxonomy this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            SyncError::Generation { cause, .. }
            | SyncError::NotFoundOrUnauthorized { cause, .. }
            | SyncError::HistoryFailed { cause }
            | SyncError::UpdateFailed { cause, .. }
            | SyncError::DeleteFailed { cause, .. }
            | SyncError::ProgressUnavailable { cause, .. } => cause.kind(),
            SyncError::Validation { .. }
            | SyncError::Serialization { .. }
            | SyncError::Configuration { .. }
            | SyncError::FileSystem { .. } => FailureKind::Validation,
        }
    }

    /// The single message shown to the end user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
