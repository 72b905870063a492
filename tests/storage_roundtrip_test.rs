// ==========================================
// Persistência - testes de integração
// ==========================================
// Gravação e recarga dos blobs JSON pelo objeto de aplicação.
// ==========================================

use rebanho::domain::{Category, Cow, CowStatus, RegistrationStatus};
use rebanho::importer::ImportKind;
use rebanho::HerdApp;
use std::io::Write;
use tempfile::{Builder, TempDir};

fn cow(id: &str) -> Cow {
    Cow {
        id: id.to_string(),
        animal: "Vaca Adulta".to_string(),
        origem: "Compra".to_string(),
        farm: "Segredo".to_string(),
        lot: "Lote 1".to_string(),
        location: "Pasto A".to_string(),
        status: CowStatus::Prenha,
        registration_status: RegistrationStatus::Ativo,
        lote_t: None,
        obs1: Some("observação".to_string()),
        motivo_do_descarte: None,
        mes: None,
        ano: None,
    }
}

#[test]
fn test_save_and_reopen_preserves_everything() {
    let dir = TempDir::new().unwrap();

    {
        let mut app = HerdApp::open(dir.path());
        app.add_cow(cow("101")).unwrap();
        app.add_lookup_item(Category::Pastures, "Pasto A").unwrap();
        app.save().unwrap();
    }

    let reopened = HerdApp::open(dir.path());
    let c = reopened.herd().find_cow("101").unwrap();
    assert_eq!(c.status, CowStatus::Prenha);
    assert_eq!(c.obs1.as_deref(), Some("observação"));

    assert!(reopened.settings().contains(Category::Farms, "Segredo"));
    assert!(reopened.settings().contains(Category::Pastures, "Pasto A"));
}

#[test]
fn test_open_on_empty_dir_starts_clean() {
    let dir = TempDir::new().unwrap();
    let app = HerdApp::open(dir.path());
    assert!(app.herd().cows().is_empty());
    assert!(app.lookup_items(Category::Lots).is_empty());
}

#[test]
fn test_corrupt_blob_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("rebanho.json"), "{ quebrado").unwrap();

    let app = HerdApp::open(dir.path());
    assert!(app.herd().cows().is_empty());
}

#[test]
fn test_import_then_save_then_reimport_across_sessions() {
    let dir = TempDir::new().unwrap();

    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Brinco Nº,Animal,Localização").unwrap();
    writeln!(file, "101,Vaca Adulta,Pasto A").unwrap();

    {
        let mut app = HerdApp::open(dir.path());
        let report = app.import_file(file.path(), ImportKind::Cows).unwrap();
        assert_eq!(report.imported, 1);
        app.save().unwrap();
    }

    // nova sessão: a mesma planilha só gera duplicatas
    let mut app = HerdApp::open(dir.path());
    let report = app.import_file(file.path(), ImportKind::Cows).unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(report.duplicates, 1);
}
