use anyhow::Context;

use tarjuman::config::Config;
use tarjuman::logging::{init_tracing, log_path};

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may already be in the environment.
    let dotenv = dotenvy::dotenv().ok();

    let log_file = log_path();
    if let Err(err) = init_tracing(&log_file) {
        eprintln!("Logging disabled: {err}");
    }

    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        dotenv = ?dotenv,
        "Starting tarjuman"
    );

    tarjuman::ui::run(config).context("Terminal UI failed")?;
    Ok(())
}
