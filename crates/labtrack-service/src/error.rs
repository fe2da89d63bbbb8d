use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Data(#[from] labtrack_data::error::DataError),

    #[error(transparent)]
    Sched(#[from] labtrack_sched::error::SchedError),

    #[error(transparent)]
    Core(#[from] labtrack_core::error::CoreError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
