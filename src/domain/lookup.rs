// ==========================================
// Rebanho - item de cadastro (fazenda/lote/raça/pasto)
// ==========================================
// Valores nomeados selecionáveis em formulários.
// Unicidade por categoria, sem distinção de maiúsculas.
// Auto-criados quando uma importação referencia um nome novo.
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    pub id: String,
    pub name: String,
}

impl LookupItem {
    pub fn new(name: impl Into<String>) -> Self {
        LookupItem {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Key used for case-insensitive name comparison within a category.
    pub fn dedup_key(&self) -> String {
        normalize_name(&self.name)
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
