//! Server initialization and startup logic for VisionCam.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use visioncam_api::{ApiServer, AppState};
use visioncam_config::{Config, ConfigLoader, LoggingConfig};

/// `~/.visioncam`, or `./.visioncam` when there is no home directory.
pub(crate) fn visioncam_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".visioncam"))
        .unwrap_or_else(|| PathBuf::from(".visioncam"))
}

/// Directory for log files.
pub(crate) fn log_dir(logging: &LoggingConfig) -> PathBuf {
    match &logging.dir {
        Some(dir) => PathBuf::from(ConfigLoader::expand_path(dir)),
        None => visioncam_dir().join("logs"),
    }
}

/// Initialize tracing with console and file output.
///
/// Log files rotate daily. `RUST_LOG` takes precedence over the configured level.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir(logging);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("visioncam")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the background writer alive for the life of the process.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting VisionCam v{}", env!("CARGO_PKG_VERSION"));
    info!(
        region = %config.providers.bedrock.region,
        model_id = %config.providers.bedrock.model_id,
        "Bedrock settings"
    );
    info!(model = %config.providers.openai.model, "OpenAI settings");

    let state = Arc::new(AppState::from_config(&config));
    let server = ApiServer::new(config.server.clone(), state);
    server.run().await
}
