// ==========================================
// Rebanho - reconciliação de linhas importadas
// ==========================================
// Fluxo por linha: vazio? -> mapear -> coagir -> validar obrigatórios
// -> deduplicar -> auto-registrar cadastros -> gravar.
// Falha de linha nunca aborta o lote; linhas já gravadas permanecem.
// ==========================================

use crate::domain::{
    Birth, BirthSex, Category, Cow, CowStatus, RegistrationStatus,
};
use crate::importer::column_mapper::{BirthField, ColumnMapper, CowField, ImportKind};
use crate::importer::data_cleaner::{normalize_null, parse_flexible_date};
use crate::importer::file_parser::SheetData;
use crate::repository::{HerdRepository, SettingsRepository};
use std::collections::HashMap;
use tracing::{info, warn};

// ==========================================
// Resultado por linha e relatório do lote
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Linha com todas as células vazias.
    EmptyRow,
    /// Chave natural já existente; ignorada em silêncio, sem erro.
    Duplicate { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Número da linha na planilha (cabeçalho = linha 1).
    pub row: usize,
    pub message: String,
}

#[derive(Debug)]
pub enum RowOutcome {
    Imported,
    Skipped(SkipReason),
    Failed(RowError),
}

/// Contagens expostas separadamente: cabe ao chamador decidir como
/// apresentar "nada importado porque tudo era duplicado" versus
/// "nada importado porque tudo falhou".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub total_rows: usize,
    pub imported: usize,
    pub duplicates: usize,
    pub empty_rows: usize,
    pub errors: usize,
    pub row_errors: Vec<RowError>,
}

impl ImportReport {
    pub fn imported_nothing(&self) -> bool {
        self.imported == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} linha(s): {} importada(s), {} duplicada(s), {} com erro",
            self.total_rows, self.imported, self.duplicates, self.errors
        )
    }

    fn absorb(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Imported => self.imported += 1,
            RowOutcome::Skipped(SkipReason::EmptyRow) => self.empty_rows += 1,
            RowOutcome::Skipped(SkipReason::Duplicate { .. }) => self.duplicates += 1,
            RowOutcome::Failed(err) => {
                warn!(row = err.row, message = %err.message, "linha descartada");
                self.errors += 1;
                self.row_errors.push(err);
            }
        }
    }
}

// ==========================================
// Reconciliador
// ==========================================

pub struct RecordReconciler<'a> {
    herd: &'a mut HerdRepository,
    settings: &'a mut SettingsRepository,
}

impl<'a> RecordReconciler<'a> {
    pub fn new(herd: &'a mut HerdRepository, settings: &'a mut SettingsRepository) -> Self {
        RecordReconciler { herd, settings }
    }

    pub fn reconcile(&mut self, kind: ImportKind, sheet: &SheetData) -> ImportReport {
        let mut report = ImportReport {
            total_rows: sheet.rows.len(),
            ..ImportReport::default()
        };

        match kind {
            ImportKind::Cows => {
                let columns = ColumnMapper::map_cow_columns(sheet);
                for (idx, row) in sheet.rows.iter().enumerate() {
                    let row_number = idx + 2; // linha 1 é o cabeçalho
                    report.absorb(self.reconcile_cow_row(&columns, row, row_number));
                }
            }
            ImportKind::Births => {
                let columns = ColumnMapper::map_birth_columns(sheet);
                for (idx, row) in sheet.rows.iter().enumerate() {
                    let row_number = idx + 2;
                    report.absorb(self.reconcile_birth_row(&columns, row, row_number));
                }
            }
        }

        info!(
            total = report.total_rows,
            imported = report.imported,
            duplicates = report.duplicates,
            errors = report.errors,
            "importação concluída"
        );
        report
    }

    // ==========================================
    // Vacas
    // ==========================================

    fn reconcile_cow_row(
        &mut self,
        columns: &[Option<CowField>],
        row: &[String],
        row_number: usize,
    ) -> RowOutcome {
        if SheetData::is_blank_row(row) {
            return RowOutcome::Skipped(SkipReason::EmptyRow);
        }

        let fields = collect_fields(columns, row);
        let get = |f: CowField| fields.get(&f).cloned();

        let id = match get(CowField::Id) {
            Some(v) => v,
            None => return failed(row_number, "Brinco Nº é obrigatório"),
        };
        let animal = match get(CowField::Animal) {
            Some(v) => v,
            None => return failed(row_number, "campo Animal é obrigatório"),
        };
        let location = match get(CowField::Location) {
            Some(v) => v,
            None => return failed(row_number, "campo Localização é obrigatório"),
        };

        let status = match get(CowField::Status) {
            None => CowStatus::default(),
            Some(v) => match CowStatus::parse_label(&v) {
                Some(s) => s,
                None => return failed(row_number, &format!("status desconhecido: {v}")),
            },
        };
        let registration_status = match get(CowField::RegistrationStatus) {
            None => RegistrationStatus::default(),
            Some(v) => match RegistrationStatus::parse_label(&v) {
                Some(s) => s,
                None => {
                    return failed(row_number, &format!("status de cadastro desconhecido: {v}"))
                }
            },
        };

        // Duplicata pela chave natural: ignorada sem erro.
        if self.herd.cow_exists(&id) {
            return RowOutcome::Skipped(SkipReason::Duplicate { key: id });
        }

        let farm = get(CowField::Farm).unwrap_or_default();
        let lot = get(CowField::Lot).unwrap_or_default();

        // Cadastros referenciados entram antes do registro.
        self.settings.ensure_item(Category::Farms, &farm);
        self.settings.ensure_item(Category::Lots, &lot);

        let cow = Cow {
            id,
            animal,
            origem: get(CowField::Origem).unwrap_or_default(),
            farm,
            lot,
            location,
            status,
            registration_status,
            lote_t: get(CowField::LoteT),
            obs1: get(CowField::Obs1),
            motivo_do_descarte: get(CowField::MotivoDoDescarte),
            mes: get(CowField::Mes),
            ano: get(CowField::Ano),
        };

        match self.herd.add_cow(cow) {
            Ok(()) => RowOutcome::Imported,
            Err(e) => failed(row_number, &e.to_string()),
        }
    }

    // ==========================================
    // Nascimentos
    // ==========================================

    fn reconcile_birth_row(
        &mut self,
        columns: &[Option<BirthField>],
        row: &[String],
        row_number: usize,
    ) -> RowOutcome {
        if SheetData::is_blank_row(row) {
            return RowOutcome::Skipped(SkipReason::EmptyRow);
        }

        let fields = collect_fields(columns, row);
        let get = |f: BirthField| fields.get(&f).cloned();

        let cow_id = match get(BirthField::CowId) {
            Some(v) => v,
            None => return failed(row_number, "Brinco Nº (Mãe) é obrigatório"),
        };
        let raw_date = match get(BirthField::Date) {
            Some(v) => v,
            None => return failed(row_number, "data de nascimento é obrigatória"),
        };
        let date = match parse_flexible_date(&raw_date) {
            Some(d) => d,
            None => return failed(row_number, &format!("data inválida: {raw_date}")),
        };
        let sex = match get(BirthField::Sex) {
            None => return failed(row_number, "campo Sexo é obrigatório"),
            Some(v) => match BirthSex::parse_label(&v) {
                Some(s) => s,
                None => return failed(row_number, &format!("sexo desconhecido: {v}")),
            },
        };

        let breed = match get(BirthField::Breed) {
            Some(v) => v,
            None => return failed(row_number, "campo Raça é obrigatório"),
        };
        let lot = match get(BirthField::Lot) {
            Some(v) => v,
            None => return failed(row_number, "campo Lote é obrigatório"),
        };
        let farm = match get(BirthField::Farm) {
            Some(v) => v,
            None => return failed(row_number, "campo Fazenda é obrigatório"),
        };
        let location = match get(BirthField::Location) {
            Some(v) => v,
            None => return failed(row_number, "campo Localização é obrigatório"),
        };

        // Mesma mãe, mesmo dia: duplicata silenciosa.
        if self.herd.birth_exists(&cow_id, date) {
            let key = format!("{} / {}", cow_id, date.format("%d/%m/%Y"));
            return RowOutcome::Skipped(SkipReason::Duplicate { key });
        }

        self.settings.ensure_item(Category::Farms, &farm);
        self.settings.ensure_item(Category::Lots, &lot);
        self.settings.ensure_item(Category::Breeds, &breed);

        let birth = Birth {
            id: String::new(),
            cow_id,
            date: Some(date),
            sex,
            breed,
            sire: get(BirthField::Sire),
            lot,
            farm,
            location,
            observations: get(BirthField::Observations),
            obs1: get(BirthField::Obs1),
            jvvo: get(BirthField::Jvvo),
        };
        self.herd.add_birth(birth);
        RowOutcome::Imported
    }
}

/// Trimmed non-empty cells keyed by the resolved field; data under
/// unrecognized headers never reaches the map.
fn collect_fields<F: Copy + Eq + std::hash::Hash>(
    columns: &[Option<F>],
    row: &[String],
) -> HashMap<F, String> {
    let mut fields = HashMap::new();
    for (idx, cell) in row.iter().enumerate() {
        if let Some(Some(field)) = columns.get(idx) {
            if let Some(value) = normalize_null(cell) {
                fields.insert(*field, value);
            }
        }
    }
    fields
}

fn failed(row: usize, message: &str) -> RowOutcome {
    RowOutcome::Failed(RowError {
        row,
        message: message.to_string(),
    })
}
