// ==========================================
// Rebanho - evento de IATF
// ==========================================
// Inseminação em tempo fixo + diagnóstico de gestação.
// Sem regra de deduplicação: cada evento é um registro próprio.
// ==========================================

use crate::domain::types::IatfResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IatfRecord {
    /// Generated id; empty string means "not yet assigned" (pre-id blobs).
    #[serde(default)]
    pub id: String,

    #[serde(rename = "cowId")]
    pub cow_id: String,

    #[serde(rename = "inseminationDate")]
    pub insemination_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bull: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(
        default,
        rename = "diagnosisDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub diagnosis_date: Option<NaiveDate>,

    #[serde(default)]
    pub result: IatfResult,
}
