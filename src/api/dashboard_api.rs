// ==========================================
// Rebanho - painel de resumo
// ==========================================
// Contagens derivadas na hora a partir dos repositórios.
// ==========================================

use crate::api::HerdApp;
use crate::domain::{BirthSex, CowStatus, RegistrationStatus};
use std::collections::BTreeMap;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_animals: usize,
    /// Classificação pelo campo Animal: bezerras, bezerros e o
    /// restante contado como vacas.
    pub vacas: usize,
    pub bezerros: usize,
    pub bezerras: usize,
    pub cows_by_status: BTreeMap<String, usize>,
    pub births_by_sex: BTreeMap<String, usize>,
    pub births_by_farm: BTreeMap<String, usize>,
}

impl HerdApp {
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let mut summary = DashboardSummary::default();

        for cow in self.herd.cows() {
            if cow.registration_status == RegistrationStatus::Inativo {
                continue;
            }
            summary.total_animals += 1;

            let animal = cow.animal.to_lowercase();
            if animal.contains("bezerra") {
                summary.bezerras += 1;
            } else if animal.contains("bezerro") {
                summary.bezerros += 1;
            } else {
                summary.vacas += 1;
            }

            *summary
                .cows_by_status
                .entry(cow.status.as_label().to_string())
                .or_insert(0) += 1;
        }

        for birth in self.herd.births() {
            *summary
                .births_by_sex
                .entry(birth.sex.as_label().to_string())
                .or_insert(0) += 1;
            *summary
                .births_by_farm
                .entry(birth.farm.clone())
                .or_insert(0) += 1;
        }

        summary
    }

    /// Vacas ativas com o status informado.
    pub fn count_cows_by_status(&self, status: CowStatus) -> usize {
        self.herd
            .cows()
            .iter()
            .filter(|c| c.registration_status == RegistrationStatus::Ativo && c.status == status)
            .count()
    }

    pub fn count_births_by_sex(&self, sex: BirthSex) -> usize {
        self.herd.births().iter().filter(|b| b.sex == sex).count()
    }
}
