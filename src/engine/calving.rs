// ==========================================
// Rebanho - previsão de parto
// ==========================================
// Aritmética local e determinística: parto previsto = inseminação
// + período de gestação. "Parto próximo" = faltam N dias ou menos,
// inclusive quando a data prevista já passou sem registro de parto.
// ==========================================

use crate::importer::data_cleaner::parse_flexible_date;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Gestação bovina média, em dias.
pub const GESTATION_DAYS: i64 = 283;

/// Janela de alerta antes do parto previsto, em dias.
pub const NEAR_CALVING_THRESHOLD_DAYS: i64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalvingError {
    #[error("data de inseminação inválida: {0}")]
    InvalidDate(String),

    #[error("data de parto prevista fora do calendário")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalvingPrediction {
    pub predicted_calving_date: NaiveDate,
    /// Negativo quando a data prevista já passou.
    pub days_until_calving: i64,
    pub is_near_calving: bool,
}

/// Previsão com os parâmetros padrão.
pub fn predict(insemination: NaiveDate, today: NaiveDate) -> Result<CalvingPrediction, CalvingError> {
    predict_with(insemination, today, GESTATION_DAYS, NEAR_CALVING_THRESHOLD_DAYS)
}

/// Previsão com período de gestação e janela de alerta configuráveis.
pub fn predict_with(
    insemination: NaiveDate,
    today: NaiveDate,
    gestation_days: i64,
    near_threshold_days: i64,
) -> Result<CalvingPrediction, CalvingError> {
    let predicted = insemination
        .checked_add_signed(Duration::days(gestation_days))
        .ok_or(CalvingError::OutOfRange)?;
    let days_until = (predicted - today).num_days();
    Ok(CalvingPrediction {
        predicted_calving_date: predicted,
        days_until_calving: days_until,
        is_near_calving: days_until <= near_threshold_days,
    })
}

/// Conveniência para entradas textuais (CLI, planilhas).
pub fn predict_iso(insemination: &str, today: NaiveDate) -> Result<CalvingPrediction, CalvingError> {
    let date = parse_flexible_date(insemination)
        .ok_or_else(|| CalvingError::InvalidDate(insemination.to_string()))?;
    predict(date, today)
}
