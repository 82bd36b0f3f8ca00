use crate::types::FilmId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No film with id {id}")]
    NotFound { id: FilmId },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
