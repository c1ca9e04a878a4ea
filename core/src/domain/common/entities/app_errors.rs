use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
