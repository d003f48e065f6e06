use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] painel_core::error::CoreError),

    #[error(transparent)]
    PhoneError(#[from] painel_engine::phone::PhoneError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] reqwest::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
