use thiserror::Error;

/// Top-level error type for the roomgrid engine.
#[derive(Debug, Error)]
pub enum RoomGridError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors related to scene entity lookup.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("element is not a modular room")]
    NotAModularRoom,
}

/// Errors related to editor operations.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to scene persistence.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("user id must not be empty")]
    MissingUserId,

    #[error("scene format version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`RoomGridError`].
pub type Result<T> = std::result::Result<T, RoomGridError>;
