// ==========================================
// Rebanho - leitura de planilhas
// ==========================================
// Primeira linha = cabeçalhos; demais linhas = dados, alinhados
// por posição ao cabeçalho. Linhas totalmente vazias são mantidas
// para o reconciliador contabilizar (os números de linha batem
// com a planilha de origem).
// Suporta: Excel (.xlsx/.xls) e CSV (.csv).
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Conteúdo tabular de um arquivo importado.
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    pub fn is_blank_row(row: &[String]) -> bool {
        row.iter().all(|cell| cell.trim().is_empty())
    }
}

pub trait FileParser {
    fn parse(&self, file_path: &Path) -> ImportResult<SheetData>;
}

// ==========================================
// CSV
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse(&self, file_path: &Path) -> ImportResult<SheetData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // linhas com larguras diferentes são toleradas
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(ImportError::MissingHeaderRow(
                file_path.display().to_string(),
            ));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = vec![String::new(); headers.len()];
            for (col_idx, value) in record.iter().enumerate() {
                if col_idx < row.len() {
                    row[col_idx] = value.trim().to_string();
                }
            }
            rows.push(row);
        }

        Ok(SheetData { headers, rows })
    }
}

// ==========================================
// Excel
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse(&self, file_path: &Path) -> ImportResult<SheetData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // open_workbook_auto detecta o formato, cobrindo .xls binário
        // além de .xlsx
        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("arquivo sem planilhas".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut raw_rows = range.rows();
        let header_row = raw_rows
            .next()
            .ok_or_else(|| ImportError::MissingHeaderRow(file_path.display().to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in raw_rows {
            let mut row = vec![String::new(); headers.len()];
            for (col_idx, cell) in data_row.iter().enumerate() {
                if col_idx < row.len() {
                    row[col_idx] = cell_to_string(cell);
                }
            }
            rows.push(row);
        }

        Ok(SheetData { headers, rows })
    }
}

/// Células de data nativas do Excel viram texto ISO (YYYY-MM-DD),
/// que o limpador de datas já aceita.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => excel_serial_to_iso(dt.as_f64())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.split('T').next().unwrap_or(s).to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Número de série do Excel (dias desde 1899-12-30) para data ISO.
fn excel_serial_to_iso(serial: f64) -> Option<String> {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_signed(chrono::Duration::days(serial.trunc() as i64))?;
    Some(date.format("%Y-%m-%d").to_string())
}

// ==========================================
// Despacho por extensão
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<SheetData> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
