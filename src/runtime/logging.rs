use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};
use crate::error::{Error, Result};

/// Install the global `tracing` subscriber writing to the log file.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout or
/// stderr. `ENCORE_LOG` takes precedence over `logging.level`.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    if !settings.enabled {
        return Ok(());
    }
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env("ENCORE_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
