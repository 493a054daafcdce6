use crate::config;
use crate::error::Result;

/// Load and validate the settings.
///
/// A missing or unparsable config falls back to defaults; a config that
/// parses but names an impossible player setup is an error.
pub fn load_settings() -> Result<config::Settings> {
    settle(config::Settings::load())
}

fn settle(loaded: std::result::Result<config::Settings, ::config::ConfigError>) -> Result<config::Settings> {
    let settings = match loaded {
        Ok(s) => s,
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("encore: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };
    settings.validate()?;
    Ok(settings)
}
