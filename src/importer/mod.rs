// ==========================================
// Rebanho - importação de planilhas
// ==========================================
// Pipeline: leitura do arquivo -> mapeamento de colunas ->
// limpeza/coerção -> reconciliação contra os repositórios.
// ==========================================

pub mod column_mapper;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod reconciler;

pub use column_mapper::{BirthField, ColumnMapper, CowField, ImportKind};
pub use data_cleaner::{normalize_null, parse_flexible_date};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, SheetData, UniversalFileParser};
pub use reconciler::{ImportReport, RecordReconciler, RowError, RowOutcome, SkipReason};
