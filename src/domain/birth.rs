// ==========================================
// Rebanho - registro de nascimento
// ==========================================
// Identidade: id gerado (uuid). Registros antigos podem chegar
// sem id no blob persistido; o carregamento atribui um.
// Chave natural de deduplicação: (brinco da mãe, dia do parto).
// ==========================================

use crate::domain::cow::normalize_ear_tag;
use crate::domain::types::BirthSex;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birth {
    /// Generated id; empty string means "not yet assigned" (pre-id blobs).
    #[serde(default)]
    pub id: String,

    /// Brinco Nº da mãe. Referência não verificada contra o cadastro.
    #[serde(rename = "cowId")]
    pub cow_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    pub sex: BirthSex,
    #[serde(default)]
    pub breed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sire: Option<String>,
    #[serde(default)]
    pub lot: String,
    #[serde(default)]
    pub farm: String,
    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obs1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jvvo: Option<String>,
}

impl Birth {
    /// Natural duplicate key, defined only when the date is known.
    pub fn dedup_key(&self) -> Option<(String, NaiveDate)> {
        self.date.map(|d| (normalize_ear_tag(&self.cow_id), d))
    }
}
