use alias_shortener::config::{self, Config};
use alias_shortener::server;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;

    tracing::info!(
        env = %config.app_env,
        version = env!("CARGO_PKG_VERSION"),
        "Starting alias-shortener"
    );
    tracing::debug!("Debug messages are enabled");
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = ?e, "Server failed");
        return Err(e);
    }

    Ok(())
}

/// Installs the global subscriber: pretty text for `local`, JSON otherwise.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_filter())?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json_logs() {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {e}"))?;
    }

    Ok(())
}
