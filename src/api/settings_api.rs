// ==========================================
// Rebanho - cadastros auxiliares
// ==========================================
// Lotes, pastos, fazendas e raças: listas de apoio usadas nos
// formulários e alimentadas automaticamente pela importação.
// ==========================================

use crate::api::{ApiResult, HerdApp};
use crate::domain::{Category, LookupItem};
use tracing::info;

impl HerdApp {
    pub fn lookup_items(&self, category: Category) -> &[LookupItem] {
        self.settings.items(category)
    }

    pub fn add_lookup_item(&mut self, category: Category, name: &str) -> ApiResult<LookupItem> {
        let item = self.settings.add_item(category, name)?;
        info!(?category, name = %item.name, "cadastro adicionado");
        Ok(item)
    }

    /// Remove apenas o item de cadastro; registros que referenciam o
    /// nome permanecem intactos.
    pub fn remove_lookup_item(&mut self, category: Category, id: &str) -> ApiResult<LookupItem> {
        let removed = self.settings.remove_item(category, id)?;
        info!(?category, name = %removed.name, "cadastro removido");
        Ok(removed)
    }
}
