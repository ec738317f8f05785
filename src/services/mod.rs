use thiserror::Error;

use crate::export::ExportError;
use crate::repository::errors::RepositoryError;

pub mod client;

/// Business-level failures surfaced to the HTTP layer, which maps each kind
/// to a status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A named lookup matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// The derived shared key (or email) collides with an existing record.
    #[error("{0}")]
    DuplicateKey(String),

    /// Input passed field validation but was rejected by business logic.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
