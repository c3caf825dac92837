//! StudyHub Server - Main entry point

use anyhow::Result;
use studyhub_common::logging::{init_logging, LogConfig};
use studyhub_server::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Server defaults, overridden per-field by LOG_* environment variables
    let mut log_config = LogConfig::builder()
        .log_file_prefix("studyhub-server".to_string())
        .filter_directives("studyhub_server=debug,tower_http=debug".to_string())
        .build();
    log_config.apply_env()?;

    init_logging(&log_config)?;

    info!("Starting StudyHub Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    studyhub_server::serve(config).await
}
