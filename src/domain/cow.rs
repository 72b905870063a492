// ==========================================
// Rebanho - cadastro de vaca
// ==========================================
// Chave natural: número do brinco (campo `id`),
// comparado sem distinção de maiúsculas na deduplicação.
// ==========================================

use crate::domain::types::{CowStatus, RegistrationStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    /// Brinco Nº - identificador de negócio, único no rebanho.
    pub id: String,

    /// Tipo/nome do animal (texto livre: "Vaca Adulta", "Novilha", ...).
    pub animal: String,

    /// Categoria de origem ("Compra", "Cria da Fazenda", ...).
    #[serde(default)]
    pub origem: String,

    #[serde(default)]
    pub farm: String,
    #[serde(default)]
    pub lot: String,
    pub location: String,

    #[serde(default)]
    pub status: CowStatus,
    #[serde(default, rename = "registrationStatus")]
    pub registration_status: RegistrationStatus,

    // Campos opcionais mantidos das planilhas originais.
    #[serde(default, rename = "loteT", skip_serializing_if = "Option::is_none")]
    pub lote_t: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obs1: Option<String>,
    #[serde(
        default,
        rename = "motivoDoDescarte",
        skip_serializing_if = "Option::is_none"
    )]
    pub motivo_do_descarte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ano: Option<String>,
}

impl Cow {
    /// Key used for case-insensitive ear-tag comparison.
    pub fn dedup_key(&self) -> String {
        normalize_ear_tag(&self.id)
    }
}

/// Trim + lowercase. Import and form paths must agree on this.
pub fn normalize_ear_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}
