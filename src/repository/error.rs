// ==========================================
// Rebanho - erros da camada de repositório
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("registro duplicado ({entity}): {key}")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("registro não encontrado ({entity}): {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("registro inválido: {0}")]
    InvalidRecord(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
