// ==========================================
// Rebanho - repositório de cadastros
// ==========================================
// Coleções de itens nomeados (lotes, pastos, fazendas, raças).
// Unicidade por nome dentro da categoria, sem distinção de
// maiúsculas. A importação auto-registra nomes novos por aqui.
// ==========================================

use crate::domain::{normalize_name, Category, LookupItem};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct SettingsRepository {
    lots: Vec<LookupItem>,
    pastures: Vec<LookupItem>,
    farms: Vec<LookupItem>,
    breeds: Vec<LookupItem>,
}

impl SettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(
        lots: Vec<LookupItem>,
        pastures: Vec<LookupItem>,
        farms: Vec<LookupItem>,
        breeds: Vec<LookupItem>,
    ) -> Self {
        let mut repo = SettingsRepository {
            lots,
            pastures,
            farms,
            breeds,
        };
        repo.dedupe();
        repo
    }

    pub fn items(&self, category: Category) -> &[LookupItem] {
        match category {
            Category::Lots => &self.lots,
            Category::Pastures => &self.pastures,
            Category::Farms => &self.farms,
            Category::Breeds => &self.breeds,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<LookupItem> {
        match category {
            Category::Lots => &mut self.lots,
            Category::Pastures => &mut self.pastures,
            Category::Farms => &mut self.farms,
            Category::Breeds => &mut self.breeds,
        }
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        let key = normalize_name(name);
        self.items(category).iter().any(|i| i.dedup_key() == key)
    }

    pub fn find_by_name(&self, category: Category, name: &str) -> Option<&LookupItem> {
        let key = normalize_name(name);
        self.items(category).iter().find(|i| i.dedup_key() == key)
    }

    /// Explicit registration (settings screen). Duplicates are an error.
    pub fn add_item(&mut self, category: Category, name: &str) -> RepositoryResult<LookupItem> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RepositoryError::InvalidRecord(
                "nome do item não pode ser vazio".to_string(),
            ));
        }
        if self.contains(category, trimmed) {
            return Err(RepositoryError::DuplicateKey {
                entity: "item de cadastro",
                key: trimmed.to_string(),
            });
        }
        let item = LookupItem::new(trimmed);
        self.items_mut(category).push(item.clone());
        Ok(item)
    }

    /// Import-side registration: creates the item when the name is new,
    /// otherwise returns the existing id. Never fails on duplicates.
    pub fn ensure_item(&mut self, category: Category, name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(existing) = self.find_by_name(category, trimmed) {
            return Some(existing.id.clone());
        }
        let item = LookupItem::new(trimmed);
        let id = item.id.clone();
        self.items_mut(category).push(item);
        Some(id)
    }

    pub fn remove_item(&mut self, category: Category, id: &str) -> RepositoryResult<LookupItem> {
        let items = self.items_mut(category);
        let pos = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "item de cadastro",
                key: id.to_string(),
            })?;
        Ok(items.remove(pos))
    }

    /// Drops case-insensitive duplicates, keeping the first occurrence.
    /// Applied on load and before every save.
    pub fn dedupe(&mut self) {
        for category in Category::ALL {
            let items = self.items_mut(category);
            let mut seen = HashSet::new();
            items.retain(|i| seen.insert(i.dedup_key()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_rejects_case_insensitive_duplicate() {
        let mut repo = SettingsRepository::new();
        repo.add_item(Category::Farms, "São Francisco").unwrap();

        let err = repo.add_item(Category::Farms, "são francisco").unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateKey { .. }));

        // Same name is fine in another category.
        repo.add_item(Category::Lots, "São Francisco").unwrap();
    }

    #[test]
    fn test_ensure_item_is_idempotent() {
        let mut repo = SettingsRepository::new();
        let first = repo.ensure_item(Category::Farms, "NovaFazenda").unwrap();
        let second = repo.ensure_item(Category::Farms, " novafazenda ").unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.items(Category::Farms).len(), 1);
    }

    #[test]
    fn test_ensure_item_ignores_empty_names() {
        let mut repo = SettingsRepository::new();
        assert_eq!(repo.ensure_item(Category::Lots, "   "), None);
        assert!(repo.items(Category::Lots).is_empty());
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut repo = SettingsRepository::with_items(
            vec![
                LookupItem::new("Lote 1"),
                LookupItem::new("lote 1"),
                LookupItem::new("Lote 2"),
            ],
            vec![],
            vec![],
            vec![],
        );
        repo.dedupe();

        let names: Vec<&str> = repo
            .items(Category::Lots)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lote 1", "Lote 2"]);
    }
}
