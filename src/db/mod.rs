pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("No {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration v{version} failed: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Settings document is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}
