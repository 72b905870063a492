// ==========================================
// Rebanho - erros do módulo de importação
// ==========================================
// Erros de arquivo/planilha abortam a importação; falhas de linha
// são `RowError` acumuladas no relatório, nunca fatais ao lote.
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("formato de arquivo não suportado: {0} (apenas .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("falha ao ler arquivo: {0}")]
    FileReadError(String),

    #[error("falha ao interpretar Excel: {0}")]
    ExcelParseError(String),

    #[error("falha ao interpretar CSV: {0}")]
    CsvParseError(String),

    #[error("planilha sem linha de cabeçalho: {0}")]
    MissingHeaderRow(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
