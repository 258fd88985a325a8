use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A date string that does not parse as `DD.MM.YYYY`.
    ///
    /// Separate from [`CoreError::Validation`] so clients can tell a
    /// malformed date apart from a missing field.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
