use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] labtrack_service::error::ServiceError),

    #[error(transparent)]
    Data(#[from] labtrack_data::error::DataError),

    #[error(transparent)]
    Core(#[from] labtrack_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
