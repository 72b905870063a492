// ==========================================
// Rebanho - camada de repositório
// ==========================================
// Estado em memória (escritor único) + blobs JSON persistidos.
// ==========================================

pub mod error;
pub mod herd_repo;
pub mod settings_repo;
pub mod storage;

pub use error::{RepositoryError, RepositoryResult};
pub use herd_repo::HerdRepository;
pub use settings_repo::SettingsRepository;
pub use storage::{HerdData, SettingsData, Storage, StorageError};
