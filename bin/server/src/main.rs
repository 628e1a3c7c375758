use my_telegrams_server::config::ServerConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming an optional TOML configuration file.
const CONFIG_FILE_VAR: &str = "MY_TELEGRAMS_CONFIG";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::var_os(CONFIG_FILE_VAR).map(PathBuf::from);
    let config = match ServerConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(backend = %config.backend.base_url, "Loaded configuration");

    match my_telegrams_server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!(error = %report, "Server failed");
            ExitCode::FAILURE
        }
    }
}
