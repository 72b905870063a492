// ==========================================
// Rebanho - persistência em blobs JSON
// ==========================================
// Dois arquivos: dados do rebanho e cadastros. Datas em ISO 8601.
// Falha de leitura/gravação é registrada e o aplicativo segue com
// o estado em memória, como se nada estivesse persistido.
// ==========================================

use crate::domain::{Birth, Cow, IatfRecord, LookupItem};
use crate::repository::herd_repo::HerdRepository;
use crate::repository::settings_repo::SettingsRepository;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

pub const HERD_FILE: &str = "rebanho.json";
pub const SETTINGS_FILE: &str = "cadastros.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("falha de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("falha de serialização: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Blob principal: { cows, births, iatfs }.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HerdData {
    #[serde(default)]
    pub cows: Vec<Cow>,
    #[serde(default)]
    pub births: Vec<Birth>,
    #[serde(default)]
    pub iatfs: Vec<IatfRecord>,
}

/// Blob de cadastros: { lots, pastures, farms, breeds }.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub lots: Vec<LookupItem>,
    #[serde(default)]
    pub pastures: Vec<LookupItem>,
    #[serde(default)]
    pub farms: Vec<LookupItem>,
    #[serde(default)]
    pub breeds: Vec<LookupItem>,
}

pub struct Storage {
    herd_path: PathBuf,
    settings_path: PathBuf,
}

impl Storage {
    pub fn new(data_dir: &Path) -> Self {
        Storage {
            herd_path: data_dir.join(HERD_FILE),
            settings_path: data_dir.join(SETTINGS_FILE),
        }
    }

    pub fn herd_path(&self) -> &Path {
        &self.herd_path
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads the herd blob. Missing or unreadable file falls back to an
    /// empty repository. Birth/IATF records without an id get one
    /// assigned, so id assignment is idempotent across reloads.
    pub fn load_herd(&self) -> HerdRepository {
        let mut data: HerdData = self.read_blob(&self.herd_path);

        for birth in &mut data.births {
            if birth.id.trim().is_empty() {
                birth.id = Uuid::new_v4().to_string();
            }
        }
        for record in &mut data.iatfs {
            if record.id.trim().is_empty() {
                record.id = Uuid::new_v4().to_string();
            }
        }

        HerdRepository::with_records(data.cows, data.births, data.iatfs)
    }

    pub fn save_herd(&self, repo: &HerdRepository) -> Result<(), StorageError> {
        let data = HerdData {
            cows: repo.cows().to_vec(),
            births: repo.births().to_vec(),
            iatfs: repo.iatfs().to_vec(),
        };
        self.write_blob(&self.herd_path, &data)
    }

    /// Loads the settings blob, deduplicated case-insensitively.
    pub fn load_settings(&self) -> SettingsRepository {
        let data: SettingsData = self.read_blob(&self.settings_path);
        SettingsRepository::with_items(data.lots, data.pastures, data.farms, data.breeds)
    }

    pub fn save_settings(&self, repo: &SettingsRepository) -> Result<(), StorageError> {
        use crate::domain::Category;
        let data = SettingsData {
            lots: dedupe_items(repo.items(Category::Lots)),
            pastures: dedupe_items(repo.items(Category::Pastures)),
            farms: dedupe_items(repo.items(Category::Farms)),
            breeds: dedupe_items(repo.items(Category::Breeds)),
        };
        self.write_blob(&self.settings_path, &data)
    }

    fn read_blob<T: Default + for<'de> Deserialize<'de>>(&self, path: &Path) -> T {
        if !path.exists() {
            debug!(path = %path.display(), "blob inexistente, iniciando vazio");
            return T::default();
        }
        match fs::read_to_string(path).map_err(StorageError::from).and_then(|raw| {
            serde_json::from_str::<T>(&raw).map_err(StorageError::from)
        }) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falha ao ler blob, iniciando vazio");
                T::default()
            }
        }
    }

    fn write_blob<T: Serialize>(&self, path: &Path, data: &T) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(data)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

/// Dedupe applied before every save, keeping the first occurrence.
fn dedupe_items(items: &[LookupItem]) -> Vec<LookupItem> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|i| seen.insert(i.dedup_key()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BirthSex, IatfResult};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_files_yields_empty_state() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        let herd = storage.load_herd();
        assert!(herd.cows().is_empty());
        assert!(herd.births().is_empty());

        let settings = storage.load_settings();
        assert!(settings.items(crate::domain::Category::Farms).is_empty());
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        fs::write(storage.herd_path(), "{ not json").unwrap();

        let herd = storage.load_herd();
        assert!(herd.cows().is_empty());
    }

    #[test]
    fn test_herd_roundtrip_preserves_dates_as_iso() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        let mut repo = HerdRepository::new();
        repo.add_birth(Birth {
            id: String::new(),
            cow_id: "101".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10),
            sex: BirthSex::Femea,
            breed: "Nelore".to_string(),
            sire: None,
            lot: "Lote 1".to_string(),
            farm: "Segredo".to_string(),
            location: "Pasto A".to_string(),
            observations: None,
            obs1: None,
            jvvo: None,
        });
        storage.save_herd(&repo).unwrap();

        let raw = fs::read_to_string(storage.herd_path()).unwrap();
        assert!(raw.contains("\"2024-03-10\""));

        let reloaded = storage.load_herd();
        assert_eq!(reloaded.births().len(), 1);
        assert_eq!(
            reloaded.births()[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
    }

    #[test]
    fn test_load_assigns_missing_ids_idempotently() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        // Blob written by an older version, records without ids.
        let raw = r#"{
            "cows": [],
            "births": [
                {"cowId": "101", "date": "2024-03-10", "sex": "Macho"}
            ],
            "iatfs": [
                {"cowId": "101", "inseminationDate": "2024-01-01"}
            ]
        }"#;
        fs::write(storage.herd_path(), raw).unwrap();

        let herd = storage.load_herd();
        let birth_id = herd.births()[0].id.clone();
        let iatf_id = herd.iatfs()[0].id.clone();
        assert!(!birth_id.is_empty());
        assert!(!iatf_id.is_empty());
        assert_eq!(herd.iatfs()[0].result, IatfResult::NaoChecado);

        // Save and reload: assigned ids must survive unchanged.
        storage.save_herd(&herd).unwrap();
        let again = storage.load_herd();
        assert_eq!(again.births()[0].id, birth_id);
        assert_eq!(again.iatfs()[0].id, iatf_id);
    }

    #[test]
    fn test_settings_saved_deduped() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        let repo = SettingsRepository::with_items(
            vec![LookupItem::new("Lote 1"), LookupItem::new("LOTE 1")],
            vec![],
            vec![],
            vec![],
        );
        storage.save_settings(&repo).unwrap();

        let reloaded = storage.load_settings();
        assert_eq!(reloaded.items(crate::domain::Category::Lots).len(), 1);
    }
}
