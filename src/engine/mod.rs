// ==========================================
// Rebanho - motores de consulta e previsão
// ==========================================

pub mod calving;
pub mod columns;
pub mod list_query;

pub use calving::{
    predict, predict_iso, predict_with, CalvingError, CalvingPrediction, GESTATION_DAYS,
    NEAR_CALVING_THRESHOLD_DAYS,
};
pub use columns::{BirthColumn, CowColumn, IatfColumn};
pub use list_query::{
    unique_values, ColumnSpec, ListQuery, PageSize, QueryPage, SortDirection, MISSING_DATE_LABEL,
};
