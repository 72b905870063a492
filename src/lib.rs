// ==========================================
// Rebanho - núcleo de gestão de rebanho bovino
// ==========================================
// Importação de planilhas, listas com filtro/ordenação/paginação,
// previsão de parto e persistência em JSON.
// ==========================================

// ==========================================
// Módulos
// ==========================================

// Entidades e tipos do domínio
pub mod domain;

// Repositórios em memória e persistência
pub mod repository;

// Motores de consulta e previsão
pub mod engine;

// Importação de planilhas
pub mod importer;

// Exportação para CSV
pub mod exporter;

// Configuração
pub mod config;

// Logging
pub mod logging;

// Camada de aplicação
pub mod api;

// ==========================================
// Reexportações
// ==========================================

pub use domain::{
    Birth, BirthSex, Category, Cow, CowStatus, IatfRecord, IatfResult, LookupItem,
    RegistrationStatus,
};

pub use repository::{HerdRepository, SettingsRepository, Storage};

pub use engine::{
    BirthColumn, CalvingPrediction, CowColumn, IatfColumn, ListQuery, PageSize, QueryPage,
    SortDirection,
};

pub use importer::{ImportKind, ImportReport};

pub use api::{ApiError, ApiResult, CalvingAdvisor, CalvingReport, DashboardSummary, HerdApp};

// ==========================================
// Constantes
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Rebanho - Gestão de Gado";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
