// ==========================================
// Rebanho - configuração da aplicação
// ==========================================
// Arquivo JSON opcional no diretório de dados; ausência ou erro de
// leitura caem nos padrões, com aviso no log.
// ==========================================

use crate::engine::calving::{GESTATION_DAYS, NEAR_CALVING_THRESHOLD_DAYS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Diretório dos arquivos de dados (rebanho.json, cadastros.json).
    pub data_dir: PathBuf,
    /// Período de gestação usado na previsão de parto, em dias.
    pub gestation_days: i64,
    /// Janela de alerta de parto próximo, em dias.
    pub near_calving_threshold_days: i64,
    /// Tamanho de página inicial das listas.
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            gestation_days: GESTATION_DAYS,
            near_calving_threshold_days: NEAR_CALVING_THRESHOLD_DAYS,
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Carrega a configuração do diretório informado; qualquer
    /// problema devolve os padrões.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "configuração inválida, usando padrões");
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        }
    }

    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(dir.join(CONFIG_FILE), content)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rebanho")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path());
        assert_eq!(config.gestation_days, GESTATION_DAYS);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ nada }").unwrap();
        let config = AppConfig::load(dir.path());
        assert_eq!(config.near_calving_threshold_days, NEAR_CALVING_THRESHOLD_DAYS);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.gestation_days = 280;
        config.save(dir.path()).unwrap();

        let loaded = AppConfig::load(dir.path());
        assert_eq!(loaded.gestation_days, 280);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"gestation_days": 285}"#).unwrap();
        let config = AppConfig::load(dir.path());
        assert_eq!(config.gestation_days, 285);
        assert_eq!(config.near_calving_threshold_days, NEAR_CALVING_THRESHOLD_DAYS);
    }
}
