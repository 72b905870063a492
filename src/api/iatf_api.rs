// ==========================================
// Rebanho - operações sobre IATF
// ==========================================

use crate::api::{ApiError, ApiResult, HerdApp};
use crate::domain::{CowStatus, IatfRecord, IatfResult};
use crate::engine::columns::IatfColumn;
use crate::engine::list_query::{unique_values, ListQuery, QueryPage};
use chrono::NaiveDate;
use tracing::info;

impl HerdApp {
    pub fn add_iatf(&mut self, record: IatfRecord) -> ApiResult<String> {
        if record.cow_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Brinco Nº (Vaca) é obrigatório".to_string(),
            ));
        }
        let id = self.herd.add_iatf(record);
        info!(id, "IATF registrada");
        Ok(id)
    }

    pub fn update_iatf(&mut self, updated: IatfRecord) -> ApiResult<()> {
        self.herd.update_iatf(updated)?;
        Ok(())
    }

    pub fn delete_iatf(&mut self, id: &str) -> ApiResult<IatfRecord> {
        let removed = self.herd.delete_iatf(id)?;
        info!(id, "IATF removida");
        Ok(removed)
    }

    /// Lançamento do diagnóstico de gestação. Resultado "Prenha"
    /// atualiza também o status da vaca, quando ela existe no rebanho.
    pub fn record_diagnosis(
        &mut self,
        id: &str,
        diagnosis_date: NaiveDate,
        result: IatfResult,
    ) -> ApiResult<()> {
        let mut record = self
            .herd
            .find_iatf(id)
            .cloned()
            .ok_or_else(|| ApiError::InvalidInput(format!("IATF não encontrada: {id}")))?;
        record.diagnosis_date = Some(diagnosis_date);
        record.result = result;
        let cow_id = record.cow_id.clone();
        self.herd.update_iatf(record)?;

        if result == IatfResult::Prenha && self.herd.cow_exists(&cow_id) {
            self.herd.set_cow_status(&cow_id, CowStatus::Prenha)?;
        }
        info!(id, cow_id, result = %result, "diagnóstico lançado");
        Ok(())
    }

    pub fn list_iatfs(&self, query: &ListQuery<IatfColumn>) -> QueryPage<'_, IatfRecord> {
        query.apply(self.herd.iatfs())
    }

    pub fn iatf_filter_options(&self, column: IatfColumn, search: &str) -> Vec<String> {
        unique_values(self.herd.iatfs(), column, search)
    }
}
