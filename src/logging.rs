// ==========================================
// Rebanho - inicialização de logging
// ==========================================
// tracing + tracing-subscriber, nível controlado por RUST_LOG.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa o logging da aplicação.
///
/// # Variáveis de ambiente
/// - RUST_LOG: filtro de nível (padrão: info)
///   ex.: RUST_LOG=debug ou RUST_LOG=rebanho=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Logging para testes, com saída capturada pelo harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
