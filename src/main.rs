//! TOPSIS Service binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use topsis_service::adapters::http::{app_router, AnalysisAppState};
use topsis_service::adapters::notification::{DisabledNotifier, ResendConfig, ResendNotifier};
use topsis_service::adapters::storage::LocalCsvTableStore;
use topsis_service::config::AppConfig;
use topsis_service::ports::ResultNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = LocalCsvTableStore::new(&config.storage.upload_dir, &config.storage.result_dir)
        .with_max_file_bytes(config.server.max_upload_bytes as u64);
    store.ensure_dirs().await?;
    info!(
        upload_dir = %store.upload_dir().display(),
        result_dir = %store.result_dir().display(),
        "Table storage ready"
    );

    let notifier: Arc<dyn ResultNotifier> = match &config.email {
        Some(email) => Arc::new(ResendNotifier::new(ResendConfig::from_email_config(email))?),
        None => {
            warn!("No email configuration found, result delivery is disabled");
            Arc::new(DisabledNotifier)
        }
    };

    let state = AnalysisAppState::new(
        Arc::new(store),
        notifier,
        config.analysis.validation_mode,
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "TOPSIS service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
