// ==========================================
// Rebanho - importação e exportação de arquivos
// ==========================================

use crate::api::{ApiResult, HerdApp};
use crate::exporter::CsvExporter;
use crate::importer::{ImportKind, ImportReport, RecordReconciler, UniversalFileParser};
use std::path::Path;
use tracing::info;

impl HerdApp {
    /// Importa uma planilha (.xlsx/.xls/.csv) e reconcilia linha a
    /// linha contra o rebanho. Erro de arquivo aborta; erro de linha
    /// entra no relatório e o lote segue.
    pub fn import_file(&mut self, path: &Path, kind: ImportKind) -> ApiResult<ImportReport> {
        info!(path = %path.display(), ?kind, "importação iniciada");
        let sheet = UniversalFileParser.parse(path)?;
        let report =
            RecordReconciler::new(&mut self.herd, &mut self.settings).reconcile(kind, &sheet);
        Ok(report)
    }

    pub fn export_cows_csv(&self, path: &Path) -> ApiResult<()> {
        CsvExporter.export_cows(self.herd.cows(), path)?;
        Ok(())
    }

    pub fn export_births_csv(&self, path: &Path) -> ApiResult<()> {
        CsvExporter.export_births(self.herd.births(), path)?;
        Ok(())
    }

    pub fn export_iatfs_csv(&self, path: &Path) -> ApiResult<()> {
        CsvExporter.export_iatfs(self.herd.iatfs(), path)?;
        Ok(())
    }
}
