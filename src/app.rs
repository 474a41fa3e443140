use tracing_subscriber::EnvFilter;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::Settings;
use crate::interfaces::http::{start_server, SERVICE_NAME, VERSION};

/// `RUST_LOG` wins over the configured level
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run() -> Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log_level);

    tracing::info!(
        service = SERVICE_NAME,
        version = VERSION,
        host = %settings.host,
        port = settings.port,
        "Starting HTTP server"
    );

    let server = start_server(&settings).map_err(|err| {
        tracing::error!(error = %err, "Failed to bind HTTP server");
        AppError::from(err)
    })?;

    server.await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}
