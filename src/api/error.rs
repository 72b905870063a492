// ==========================================
// Rebanho - erros da camada de aplicação
// ==========================================

use crate::engine::calving::CalvingError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use crate::repository::{RepositoryError, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Calving(#[from] CalvingError),
}

pub type ApiResult<T> = Result<T, ApiError>;
