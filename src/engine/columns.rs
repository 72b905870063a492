// ==========================================
// Rebanho - colunas das três listas
// ==========================================
// Implementações de `ColumnSpec` para vacas, nascimentos e IATF.
// Brincos ordenam pelo número inicial ("9" antes de "101");
// colunas de data ordenam pela data real, ausentes por último.
// ==========================================

use crate::domain::{Birth, Cow, IatfRecord};
use crate::engine::list_query::{ColumnSpec, MISSING_DATE_LABEL};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Brincos costumam ser numéricos com sufixos eventuais. Compara o
/// prefixo numérico quando ambos têm um; desempata (ou cai de volta)
/// na comparação lexicográfica.
fn compare_ear_tags(a: &str, b: &str) -> Ordering {
    fn leading_number(tag: &str) -> Option<u64> {
        let digits: String = tag.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
    match (leading_number(a), leading_number(b)) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Datas ausentes vão para o fim no sentido ascendente.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn opt_display(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date_display(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING_DATE_LABEL.to_string())
}

// ==========================================
// Vacas
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CowColumn {
    Id,
    Animal,
    Origem,
    Lot,
    LoteT,
    Obs1,
    Farm,
    Location,
    MotivoDoDescarte,
    Mes,
    Ano,
    Status,
    RegistrationStatus,
}

impl ColumnSpec for CowColumn {
    type Record = Cow;

    fn display_value(&self, cow: &Cow) -> String {
        match self {
            CowColumn::Id => cow.id.clone(),
            CowColumn::Animal => cow.animal.clone(),
            CowColumn::Origem => cow.origem.clone(),
            CowColumn::Lot => cow.lot.clone(),
            CowColumn::LoteT => opt_display(&cow.lote_t),
            CowColumn::Obs1 => opt_display(&cow.obs1),
            CowColumn::Farm => cow.farm.clone(),
            CowColumn::Location => cow.location.clone(),
            CowColumn::MotivoDoDescarte => opt_display(&cow.motivo_do_descarte),
            CowColumn::Mes => opt_display(&cow.mes),
            CowColumn::Ano => opt_display(&cow.ano),
            CowColumn::Status => cow.status.as_label().to_string(),
            CowColumn::RegistrationStatus => cow.registration_status.as_label().to_string(),
        }
    }

    fn compare(&self, a: &Cow, b: &Cow) -> Ordering {
        match self {
            CowColumn::Id => compare_ear_tags(&a.id, &b.id),
            _ => self.display_value(a).cmp(&self.display_value(b)),
        }
    }
}

// ==========================================
// Nascimentos
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthColumn {
    CowId,
    Date,
    Sex,
    Breed,
    Sire,
    Lot,
    Farm,
    Location,
    Observations,
    Obs1,
    Jvvo,
}

impl ColumnSpec for BirthColumn {
    type Record = Birth;

    fn display_value(&self, birth: &Birth) -> String {
        match self {
            BirthColumn::CowId => birth.cow_id.clone(),
            BirthColumn::Date => date_display(birth.date),
            BirthColumn::Sex => birth.sex.as_label().to_string(),
            BirthColumn::Breed => birth.breed.clone(),
            BirthColumn::Sire => opt_display(&birth.sire),
            BirthColumn::Lot => birth.lot.clone(),
            BirthColumn::Farm => birth.farm.clone(),
            BirthColumn::Location => birth.location.clone(),
            BirthColumn::Observations => opt_display(&birth.observations),
            BirthColumn::Obs1 => opt_display(&birth.obs1),
            BirthColumn::Jvvo => opt_display(&birth.jvvo),
        }
    }

    fn date_value(&self, birth: &Birth) -> Option<NaiveDate> {
        match self {
            BirthColumn::Date => birth.date,
            _ => None,
        }
    }

    fn is_date(&self) -> bool {
        matches!(self, BirthColumn::Date)
    }

    fn compare(&self, a: &Birth, b: &Birth) -> Ordering {
        match self {
            BirthColumn::CowId => compare_ear_tags(&a.cow_id, &b.cow_id),
            BirthColumn::Date => compare_dates(a.date, b.date),
            _ => self.display_value(a).cmp(&self.display_value(b)),
        }
    }
}

// ==========================================
// IATF
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IatfColumn {
    CowId,
    InseminationDate,
    Bull,
    Protocol,
    DiagnosisDate,
    Result,
}

impl ColumnSpec for IatfColumn {
    type Record = IatfRecord;

    fn display_value(&self, iatf: &IatfRecord) -> String {
        match self {
            IatfColumn::CowId => iatf.cow_id.clone(),
            IatfColumn::InseminationDate => date_display(Some(iatf.insemination_date)),
            IatfColumn::Bull => opt_display(&iatf.bull),
            IatfColumn::Protocol => opt_display(&iatf.protocol),
            IatfColumn::DiagnosisDate => date_display(iatf.diagnosis_date),
            IatfColumn::Result => iatf.result.as_label().to_string(),
        }
    }

    fn date_value(&self, iatf: &IatfRecord) -> Option<NaiveDate> {
        match self {
            IatfColumn::InseminationDate => Some(iatf.insemination_date),
            IatfColumn::DiagnosisDate => iatf.diagnosis_date,
            _ => None,
        }
    }

    fn is_date(&self) -> bool {
        matches!(
            self,
            IatfColumn::InseminationDate | IatfColumn::DiagnosisDate
        )
    }

    fn compare(&self, a: &IatfRecord, b: &IatfRecord) -> Ordering {
        match self {
            IatfColumn::CowId => compare_ear_tags(&a.cow_id, &b.cow_id),
            IatfColumn::InseminationDate => a.insemination_date.cmp(&b.insemination_date),
            IatfColumn::DiagnosisDate => compare_dates(a.diagnosis_date, b.diagnosis_date),
            _ => self.display_value(a).cmp(&self.display_value(b)),
        }
    }
}
