// ==========================================
// Importação - testes de integração
// ==========================================
// Caminho completo: arquivo CSV -> parser -> reconciliação ->
// repositórios, pela camada de aplicação.
// ==========================================

use rebanho::domain::{Category, CowStatus};
use rebanho::importer::ImportKind;
use rebanho::HerdApp;
use std::io::Write;
use tempfile::Builder;

fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut temp = Builder::new().suffix(".csv").tempfile().unwrap();
    for line in lines {
        writeln!(temp, "{line}").unwrap();
    }
    temp
}

#[test]
fn test_cow_import_full_flow() {
    rebanho::logging::init_test();

    let file = csv_file(&[
        "Brinco Nº,Animal,Origem,Fazenda,Lote,Localização,Status",
        "101,Vaca Adulta,Compra,São Francisco,Lote 1,Pasto A,Prenha",
        "102,Novilha,Nascida,Segredo,Lote 2,Pasto B,Vazia",
        "9,Bezerra,Nascida,Segredo,Lote 2,Pasto B,",
    ]);

    let mut app = HerdApp::in_memory();
    let report = app.import_file(file.path(), ImportKind::Cows).unwrap();

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.imported, 3);
    assert_eq!(report.errors, 0);

    let cow = app.herd().find_cow("101").unwrap();
    assert_eq!(cow.status, CowStatus::Prenha);
    assert_eq!(cow.farm, "São Francisco");

    // status ausente cai no padrão
    assert_eq!(app.herd().find_cow("9").unwrap().status, CowStatus::Vazia);

    // cadastros criados automaticamente, sem repetição
    assert_eq!(app.settings().items(Category::Farms).len(), 2);
    assert_eq!(app.settings().items(Category::Lots).len(), 2);
}

#[test]
fn test_import_is_idempotent() {
    let file = csv_file(&[
        "Brinco Nº,Animal,Localização",
        "101,Vaca Adulta,Pasto A",
        "102,Novilha,Pasto B",
    ]);

    let mut app = HerdApp::in_memory();
    let first = app.import_file(file.path(), ImportKind::Cows).unwrap();
    assert_eq!(first.imported, 2);

    let second = app.import_file(file.path(), ImportKind::Cows).unwrap();
    assert_eq!(second.imported, 0);
    assert_eq!(second.duplicates, 2);
    assert_eq!(second.errors, 0);
    assert_eq!(app.herd().cows().len(), 2);
}

#[test]
fn test_partial_failure_keeps_valid_rows() {
    let file = csv_file(&[
        "Brinco Nº,Animal,Localização,Status",
        "101,Vaca Adulta,Pasto A,Prenha",
        ",Sem Brinco,Pasto A,",
        "102,Novilha,Pasto B,Solteira",
        "103,Novilha,Pasto B,Vazia",
    ]);

    let mut app = HerdApp::in_memory();
    let report = app.import_file(file.path(), ImportKind::Cows).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.errors, 2);
    assert_eq!(report.row_errors.len(), 2);
    // números de linha batem com a planilha (cabeçalho = 1)
    assert_eq!(report.row_errors[0].row, 3);
    assert_eq!(report.row_errors[1].row, 4);

    assert!(app.herd().cow_exists("101"));
    assert!(app.herd().cow_exists("103"));
    assert!(!app.herd().cow_exists("102"));
}

#[test]
fn test_birth_import_with_varied_headers_and_dates() {
    let file = csv_file(&[
        "Brinco Nº (Mãe),Data de Nascimento,Sexo,Raça,Touro,Lote,Fazenda,Localização",
        "101,10/03/2024,Macho,Nelore,Touro X,Lote 1,Segredo,Pasto A",
        "102,2024-03-11,Fêmea,Angus,,Lote 1,Segredo,Pasto A",
        "101,10.03.2024,Macho,Nelore,Touro X,Lote 1,Segredo,Pasto A",
    ]);

    let mut app = HerdApp::in_memory();
    let report = app.import_file(file.path(), ImportKind::Births).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.duplicates, 1);

    assert!(app.settings().contains(Category::Breeds, "Nelore"));
    assert!(app.settings().contains(Category::Breeds, "Angus"));

    // todo nascimento importado recebe identificador
    assert!(app.herd().births().iter().all(|b| !b.id.is_empty()));
}

#[test]
fn test_empty_rows_are_counted_separately() {
    let file = csv_file(&[
        "Brinco Nº,Animal,Localização",
        "101,Vaca Adulta,Pasto A",
        ",,",
        ",,",
        "102,Novilha,Pasto B",
    ]);

    let mut app = HerdApp::in_memory();
    let report = app.import_file(file.path(), ImportKind::Cows).unwrap();

    assert_eq!(report.total_rows, 4);
    assert_eq!(report.imported, 2);
    assert_eq!(report.empty_rows, 2);
    assert_eq!(report.errors, 0);
    assert!(!report.imported_nothing());
}
