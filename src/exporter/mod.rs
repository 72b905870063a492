// ==========================================
// Rebanho - exportação para CSV
// ==========================================
// Cabeçalhos fixos em português, mesmos rótulos aceitos na
// importação (um arquivo exportado pode ser reimportado).
// Datas saem como DD/MM/YYYY; campo ausente vira célula vazia.
// ==========================================

use crate::domain::{Birth, Cow, IatfRecord};
use chrono::NaiveDate;
use csv::Writer;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("falha ao gravar arquivo: {0}")]
    Io(#[from] std::io::Error),

    #[error("falha ao escrever CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub const COW_EXPORT_HEADERS: [&str; 13] = [
    "Brinco Nº",
    "Animal",
    "Origem",
    "Lote",
    "Lote T",
    "Obs: 1",
    "Fazenda",
    "Localização",
    "Motivo do Descarte",
    "Mês",
    "Ano",
    "Status",
    "Status do Cadastro",
];

pub const BIRTH_EXPORT_HEADERS: [&str; 11] = [
    "Brinco Nº (Mãe)",
    "Data",
    "Sexo",
    "Raça",
    "Touro",
    "Lote",
    "Fazenda",
    "Localização",
    "Obs: 1",
    "JVVO",
    "Observações",
];

pub const IATF_EXPORT_HEADERS: [&str; 6] = [
    "Brinco Nº (Vaca)",
    "Data Inseminação",
    "Touro",
    "Protocolo",
    "Data Diagnóstico",
    "Resultado",
];

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub struct CsvExporter;

impl CsvExporter {
    pub fn export_cows(&self, cows: &[Cow], path: &Path) -> ExportResult<()> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(COW_EXPORT_HEADERS)?;
        for cow in cows {
            writer.write_record([
                cow.id.clone(),
                cow.animal.clone(),
                cow.origem.clone(),
                cow.lot.clone(),
                opt(&cow.lote_t),
                opt(&cow.obs1),
                cow.farm.clone(),
                cow.location.clone(),
                opt(&cow.motivo_do_descarte),
                opt(&cow.mes),
                opt(&cow.ano),
                cow.status.as_label().to_string(),
                cow.registration_status.as_label().to_string(),
            ])?;
        }
        writer.flush()?;
        info!(count = cows.len(), path = %path.display(), "vacas exportadas");
        Ok(())
    }

    pub fn export_births(&self, births: &[Birth], path: &Path) -> ExportResult<()> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(BIRTH_EXPORT_HEADERS)?;
        for birth in births {
            writer.write_record([
                birth.cow_id.clone(),
                format_date(birth.date),
                birth.sex.as_label().to_string(),
                birth.breed.clone(),
                opt(&birth.sire),
                birth.lot.clone(),
                birth.farm.clone(),
                birth.location.clone(),
                opt(&birth.obs1),
                opt(&birth.jvvo),
                opt(&birth.observations),
            ])?;
        }
        writer.flush()?;
        info!(count = births.len(), path = %path.display(), "nascimentos exportados");
        Ok(())
    }

    pub fn export_iatfs(&self, iatfs: &[IatfRecord], path: &Path) -> ExportResult<()> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(IATF_EXPORT_HEADERS)?;
        for iatf in iatfs {
            writer.write_record([
                iatf.cow_id.clone(),
                format_date(Some(iatf.insemination_date)),
                opt(&iatf.bull),
                opt(&iatf.protocol),
                format_date(iatf.diagnosis_date),
                iatf.result.as_label().to_string(),
            ])?;
        }
        writer.flush()?;
        info!(count = iatfs.len(), path = %path.display(), "registros de IATF exportados");
        Ok(())
    }
}
