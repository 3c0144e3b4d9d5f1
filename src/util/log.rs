use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_ENV: &str = "SOUNDALIKE_LOG";
const LOG_FILE: &str = "soundalike.log";

fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "soundalike", "soundalike")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to a file, never stdout; the terminal belongs to the UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let env_filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info")));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
