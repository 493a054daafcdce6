use std::collections::HashSet;
use std::{env, path::PathBuf};

use crate::error::{Error, Result};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `ENCORE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> std::result::Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ENCORE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Check the player topology and audio values of loaded settings.
    ///
    /// A bridge target naming no player is `Error::UnknownPlayer`; every other
    /// problem is `Error::Config`.
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(Error::Config(
                "at least one [[players]] entry is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for p in &self.players {
            if p.id.as_str().trim().is_empty() {
                return Err(Error::Config("players.id must not be blank".to_string()));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(Error::Config(format!("duplicate player id `{}`", p.id)));
            }
        }

        if !seen.contains(self.bridge.target.as_str()) {
            return Err(Error::UnknownPlayer(self.bridge.target.clone()));
        }

        if self.audio.volume_step.is_nan() || self.audio.volume_step <= 0.0 {
            return Err(Error::Config("audio.volume_step must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err(Error::Config(
                "audio.initial_volume must be within 0.0..=1.0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `ENCORE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ENCORE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/encore/config.toml`
/// or `~/.config/encore/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("encore").join("config.toml"))
}

/// Compute the default log file under `$XDG_STATE_HOME/encore/encore.log`
/// or `~/.local/state/encore/encore.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home.map(|d| d.join("encore").join("encore.log"))
}
