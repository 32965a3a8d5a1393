use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{BufReader, stdin, stdout};
use tracing::Instrument;

use order_form::{
    catalog::Catalog, cli::config_path_from_args, config::Config, console,
    logging::init_tracing, notify::CollectingNotificationSink, session::OrderSession,
    submission::HttpSubmissionGateway,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let logging_guard = init_tracing(&config.logging).context("failed to initialize logging")?;

    run(config).instrument(logging_guard.run_span()).await
}

async fn run(config: Config) -> Result<()> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let gateway = HttpSubmissionGateway::new(&config.submission)
        .context("failed to construct submission gateway")?;
    tracing::info!(
        target: "main",
        endpoint = %gateway.endpoint(),
        timeout_ms = config.submission.timeout_ms,
        features = catalog.len(),
        builtin_catalog = config.catalog.path.is_none(),
        "order_form_started"
    );

    let notifications = CollectingNotificationSink::default();
    let session = OrderSession::new(
        Arc::new(catalog),
        Arc::new(gateway),
        Arc::new(notifications.clone()),
    );

    console::run(session, notifications, BufReader::new(stdin()), stdout()).await
}
