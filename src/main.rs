// ==========================================
// Rebanho - entrada de linha de comando
// ==========================================

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use rebanho::config::AppConfig;
use rebanho::engine::calving::predict_with;
use rebanho::importer::data_cleaner::parse_flexible_date;
use rebanho::{logging, HerdApp, ImportKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rebanho", version, about = rebanho::APP_NAME)]
struct Cli {
    /// Diretório de dados (padrão: diretório do usuário)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ImportKindArg {
    /// Cadastro de vacas
    Vacas,
    /// Registro de nascimentos
    Nascimentos,
}

impl From<ImportKindArg> for ImportKind {
    fn from(kind: ImportKindArg) -> Self {
        match kind {
            ImportKindArg::Vacas => ImportKind::Cows,
            ImportKindArg::Nascimentos => ImportKind::Births,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Importa uma planilha (.xlsx/.xls/.csv)
    Import {
        /// Arquivo a importar
        file: PathBuf,
        /// Tipo de importação
        #[arg(long, value_enum)]
        kind: ImportKindArg,
    },
    /// Exporta vacas, nascimentos e IATF para CSV
    Export {
        /// Diretório de saída
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Previsão de parto a partir da data de inseminação
    Predict {
        /// Data de inseminação (DD/MM/YYYY ou YYYY-MM-DD)
        insemination_date: String,
    },
    /// Resumo do rebanho
    Summary,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| AppConfig::default().data_dir);
    let config = AppConfig::load(&data_dir);

    match cli.command {
        Command::Import { file, kind } => {
            let mut app = HerdApp::open(&data_dir);
            let report = app
                .import_file(&file, kind.into())
                .with_context(|| format!("falha ao importar {}", file.display()))?;
            app.save().context("falha ao gravar os dados")?;

            println!("{}", report.summary());
            for error in &report.row_errors {
                println!("  linha {}: {}", error.row, error.message);
            }
        }
        Command::Export { out } => {
            let app = HerdApp::open(&data_dir);
            std::fs::create_dir_all(&out)
                .with_context(|| format!("falha ao criar {}", out.display()))?;
            app.export_cows_csv(&out.join("vacas.csv"))?;
            app.export_births_csv(&out.join("nascimentos.csv"))?;
            app.export_iatfs_csv(&out.join("iatf.csv"))?;
            println!("Arquivos gravados em {}", out.display());
        }
        Command::Predict { insemination_date } => {
            let insemination = parse_flexible_date(&insemination_date)
                .with_context(|| format!("data de inseminação inválida: {insemination_date}"))?;
            let today = Local::now().date_naive();
            let prediction = predict_with(
                insemination,
                today,
                config.gestation_days,
                config.near_calving_threshold_days,
            )?;

            println!(
                "Parto previsto: {}",
                prediction.predicted_calving_date.format("%d/%m/%Y")
            );
            println!("Dias restantes: {}", prediction.days_until_calving);
            if prediction.is_near_calving {
                println!("Atenção: parto próximo.");
            }
        }
        Command::Summary => {
            let app = HerdApp::open(&data_dir);
            let summary = app.dashboard_summary();
            println!("Animais ativos: {}", summary.total_animals);
            println!(
                "  vacas: {}  bezerros: {}  bezerras: {}",
                summary.vacas, summary.bezerros, summary.bezerras
            );
            print_counts("Vacas por status", &summary.cows_by_status);
            print_counts("Nascimentos por sexo", &summary.births_by_sex);
            print_counts("Nascimentos por fazenda", &summary.births_by_farm);
        }
    }

    Ok(())
}

fn print_counts(title: &str, counts: &std::collections::BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    println!("{title}:");
    for (label, count) in counts {
        println!("  {label}: {count}");
    }
}
