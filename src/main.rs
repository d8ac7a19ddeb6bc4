//! ws-panel entry point.
//!
//! Initializes tracing, loads the configuration, and runs the terminal
//! panel loop.

use tracing_subscriber::EnvFilter;

use ws_panel::config::PanelConfig;
use ws_panel::terminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the panel.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PanelConfig::from_env();
    tracing::info!(url = %config.url, "starting ws-panel");

    terminal::run(config).await
}
