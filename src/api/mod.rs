// ==========================================
// Rebanho - camada de aplicação
// ==========================================
// `HerdApp` é o objeto de serviço: reúne os repositórios e a
// persistência, e expõe as operações que a interface consome.
// As operações estão divididas por assunto (vacas, nascimentos,
// IATF, importação, cadastros, painel, previsão).
// ==========================================

pub mod birth_api;
pub mod cow_api;
pub mod dashboard_api;
pub mod error;
pub mod iatf_api;
pub mod import_api;
pub mod prediction_api;
pub mod settings_api;

pub use dashboard_api::DashboardSummary;
pub use error::{ApiError, ApiResult};
pub use prediction_api::{CalvingAdvisor, CalvingReport};

use crate::repository::{HerdRepository, SettingsRepository, Storage};
use std::path::Path;
use tracing::info;

pub struct HerdApp {
    herd: HerdRepository,
    settings: SettingsRepository,
    storage: Option<Storage>,
}

impl HerdApp {
    /// Estado vazio, sem persistência. Usado em testes.
    pub fn in_memory() -> Self {
        HerdApp {
            herd: HerdRepository::new(),
            settings: SettingsRepository::new(),
            storage: None,
        }
    }

    /// Carrega (ou inicializa) os dados do diretório informado.
    pub fn open(data_dir: &Path) -> Self {
        let storage = Storage::new(data_dir);
        let herd = storage.load_herd();
        let settings = storage.load_settings();
        info!(
            cows = herd.cows().len(),
            births = herd.births().len(),
            iatfs = herd.iatfs().len(),
            data_dir = %data_dir.display(),
            "dados carregados"
        );
        HerdApp {
            herd,
            settings,
            storage: Some(storage),
        }
    }

    /// Grava ambos os arquivos. Sem efeito quando em memória.
    pub fn save(&self) -> ApiResult<()> {
        if let Some(storage) = &self.storage {
            storage.save_herd(&self.herd)?;
            storage.save_settings(&self.settings)?;
        }
        Ok(())
    }

    pub fn herd(&self) -> &HerdRepository {
        &self.herd
    }

    pub fn settings(&self) -> &SettingsRepository {
        &self.settings
    }
}
