// ==========================================
// Rebanho - operações sobre vacas
// ==========================================

use crate::api::{ApiError, ApiResult, HerdApp};
use crate::domain::{Category, Cow, CowStatus};
use crate::engine::columns::CowColumn;
use crate::engine::list_query::{unique_values, ListQuery, QueryPage};
use tracing::info;

impl HerdApp {
    /// Cadastro manual. Fazenda e lote referenciados entram nos
    /// cadastros automaticamente, como na importação.
    pub fn add_cow(&mut self, cow: Cow) -> ApiResult<()> {
        if cow.animal.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "campo Animal é obrigatório".to_string(),
            ));
        }
        if cow.location.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "campo Localização é obrigatório".to_string(),
            ));
        }
        self.settings.ensure_item(Category::Farms, &cow.farm);
        self.settings.ensure_item(Category::Lots, &cow.lot);
        let ear_tag = cow.id.clone();
        self.herd.add_cow(cow)?;
        info!(ear_tag, "vaca cadastrada");
        Ok(())
    }

    pub fn update_cow(&mut self, ear_tag: &str, updated: Cow) -> ApiResult<()> {
        self.settings.ensure_item(Category::Farms, &updated.farm);
        self.settings.ensure_item(Category::Lots, &updated.lot);
        self.herd.update_cow(ear_tag, updated)?;
        Ok(())
    }

    pub fn delete_cow(&mut self, ear_tag: &str) -> ApiResult<Cow> {
        let removed = self.herd.delete_cow(ear_tag)?;
        info!(ear_tag, "vaca removida");
        Ok(removed)
    }

    pub fn set_cow_status(&mut self, ear_tag: &str, status: CowStatus) -> ApiResult<()> {
        self.herd.set_cow_status(ear_tag, status)?;
        Ok(())
    }

    /// Descarte: a vaca fica inativa, com motivo e competência
    /// (mês/ano) registrados. O histórico dela permanece.
    pub fn discard_cow(
        &mut self,
        ear_tag: &str,
        reason: &str,
        mes: Option<String>,
        ano: Option<String>,
    ) -> ApiResult<()> {
        if reason.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "motivo do descarte é obrigatório".to_string(),
            ));
        }
        self.herd.discard_cow(ear_tag, reason, mes, ano)?;
        info!(ear_tag, reason, "vaca descartada");
        Ok(())
    }

    pub fn bulk_update_cow_lot(&mut self, ear_tags: &[String], new_lot: &str) -> ApiResult<usize> {
        if new_lot.trim().is_empty() {
            return Err(ApiError::InvalidInput("lote é obrigatório".to_string()));
        }
        self.settings.ensure_item(Category::Lots, new_lot);
        let updated = self.herd.bulk_update_cow_lot(ear_tags, new_lot);
        info!(count = updated, new_lot, "lote alterado em massa");
        Ok(updated)
    }

    pub fn list_cows(&self, query: &ListQuery<CowColumn>) -> QueryPage<'_, Cow> {
        query.apply(self.herd.cows())
    }

    /// Valores distintos da coluna para o menu de filtro.
    pub fn cow_filter_options(&self, column: CowColumn, search: &str) -> Vec<String> {
        unique_values(self.herd.cows(), column, search)
    }
}
