//! Error types for homefinder-db
//!
//! Every repository method returns [`Result`]. Raw `sqlx::Error`s are
//! classified once, in the `From` impl below, so `?` inside a repo already
//! yields a conflict / constraint / connectivity distinction the routing
//! layer can map to a status code.
//!
//! A lookup that matches nothing is not an error: it comes back as
//! `Ok(None)` or an empty `Vec`.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Main error type for data-access operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Unique constraint violated (duplicate email, duplicate favourite, ...)
    #[error("conflict: {message}")]
    Conflict {
        constraint: Option<String>,
        message: String,
    },

    /// Foreign key, not-null or check constraint violated
    #[error("constraint violation: {message}")]
    Constraint {
        constraint: Option<String>,
        message: String,
    },

    /// The pool could not hand out a working connection
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Configuration could not be loaded
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Anything else the driver reported (decode failures, other SQL errors)
    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),
}

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True for unique-constraint violations.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Name of the violated constraint, when the store reported one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::Conflict { constraint, .. } | Self::Constraint { constraint, .. } => {
                constraint.as_deref()
            }
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            let constraint = db.constraint().map(str::to_owned);
            let message = db.message().to_owned();

            match db.kind() {
                ErrorKind::UniqueViolation => return Self::Conflict { constraint, message },
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => return Self::Constraint { constraint, message },
                _ => {}
            }
        }

        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(err),
            other => Self::Sqlx(other),
        }
    }
}

/// Opt-in fire-and-forget handling for callers that prefer logging over
/// propagating.
///
/// ```ignore
/// // Logs at error level and continues with `None` on failure.
/// let sent = db.messages().send(&msg).await.log_and_discard("send message");
/// ```
pub trait ResultExt<T> {
    fn log_and_discard(self, operation: &str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn log_and_discard(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(operation, error = %err, "database operation failed");
                None
            }
        }
    }
}
