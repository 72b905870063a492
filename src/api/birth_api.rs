// ==========================================
// Rebanho - operações sobre nascimentos
// ==========================================

use crate::api::{ApiError, ApiResult, HerdApp};
use crate::domain::{Birth, BirthSex, Category, CowStatus};
use crate::engine::columns::BirthColumn;
use crate::engine::list_query::{unique_values, ListQuery, QueryPage};
use tracing::info;

impl HerdApp {
    pub fn add_birth(&mut self, birth: Birth) -> ApiResult<String> {
        self.validate_birth(&birth)?;
        self.register_birth_lookups(&birth);
        let id = self.herd.add_birth(birth);
        info!(id, "nascimento registrado");
        Ok(id)
    }

    /// Registro de parto: grava o nascimento e passa a mãe para
    /// "Com cria". A mãe precisa existir no rebanho.
    pub fn register_calving(&mut self, birth: Birth) -> ApiResult<String> {
        if !self.herd.cow_exists(&birth.cow_id) {
            return Err(ApiError::InvalidInput(format!(
                "vaca não encontrada: {}",
                birth.cow_id
            )));
        }
        let cow_id = birth.cow_id.clone();
        let id = self.add_birth(birth)?;
        self.herd.set_cow_status(&cow_id, CowStatus::ComCria)?;
        info!(cow_id, "parto registrado, mãe com cria");
        Ok(id)
    }

    pub fn update_birth(&mut self, updated: Birth) -> ApiResult<()> {
        self.validate_birth(&updated)?;
        self.register_birth_lookups(&updated);
        self.herd.update_birth(updated)?;
        Ok(())
    }

    pub fn delete_birth(&mut self, id: &str) -> ApiResult<Birth> {
        let removed = self.herd.delete_birth(id)?;
        info!(id, "nascimento removido");
        Ok(removed)
    }

    pub fn bulk_update_birth_lot(&mut self, ids: &[String], new_lot: &str) -> ApiResult<usize> {
        if new_lot.trim().is_empty() {
            return Err(ApiError::InvalidInput("lote é obrigatório".to_string()));
        }
        self.settings.ensure_item(Category::Lots, new_lot);
        Ok(self.herd.bulk_update_birth_lot(ids, new_lot))
    }

    pub fn bulk_update_birth_sex(&mut self, ids: &[String], sex: BirthSex) -> ApiResult<usize> {
        Ok(self.herd.bulk_update_birth_sex(ids, sex))
    }

    pub fn list_births(&self, query: &ListQuery<BirthColumn>) -> QueryPage<'_, Birth> {
        query.apply(self.herd.births())
    }

    pub fn birth_filter_options(&self, column: BirthColumn, search: &str) -> Vec<String> {
        unique_values(self.herd.births(), column, search)
    }

    fn validate_birth(&self, birth: &Birth) -> ApiResult<()> {
        if birth.cow_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Brinco Nº (Mãe) é obrigatório".to_string(),
            ));
        }
        Ok(())
    }

    fn register_birth_lookups(&mut self, birth: &Birth) {
        self.settings.ensure_item(Category::Farms, &birth.farm);
        self.settings.ensure_item(Category::Lots, &birth.lot);
        self.settings.ensure_item(Category::Breeds, &birth.breed);
    }
}
