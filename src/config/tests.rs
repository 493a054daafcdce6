use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use super::default_log_path;
use crate::error::Error;
use crate::player::PlayerId;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_encore_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", "/tmp/encore-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/encore-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/encore/encore.log")
    );
}

#[test]
fn defaults_are_valid_and_target_the_single_player() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.players.len(), 1);
    assert_eq!(s.players[0].id.as_str(), "1");
    assert_eq!(s.bridge.target.as_str(), "1");
}

#[test]
fn settings_load_players_library_and_bridge_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 0.5
volume_step = 0.1
quit_fade_out_ms = 0

[ui]
header_text = "hello"
show_cover = false

[library]
dir = "/srv/music"
extensions = ["mp3"]
recursive = false
display_fields = ["title", "source"]
display_separator = "::"

[[library.tracks]]
source = "https://example.com/stream.mp3"
title = "Remote"

[[players]]
id = "left"

[[players.tracks]]
source = "a.mp3"
title = "A"
artist = "Someone"

[[players.tracks]]
source = "b.mp3"

[[players]]
id = "right"

[bridge]
target = "right"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ENCORE__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert!(s.validate().is_ok());
    assert_eq!(s.audio.initial_volume, 0.5);
    assert_eq!(s.audio.volume_step, 0.1);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_cover);
    assert_eq!(s.library.dir, Some(std::path::PathBuf::from("/srv/music")));
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert_eq!(
        s.library.display_fields,
        vec![TrackDisplayField::Title, TrackDisplayField::Source]
    );
    assert_eq!(s.library.display_separator, "::");
    assert_eq!(s.library.tracks.len(), 1);
    assert_eq!(s.library.tracks[0].title.as_deref(), Some("Remote"));

    assert_eq!(s.players.len(), 2);
    assert_eq!(s.players[0].id.as_str(), "left");
    assert_eq!(s.players[0].tracks.len(), 2);
    assert_eq!(s.players[0].tracks[0].artist.as_deref(), Some("Someone"));
    assert_eq!(s.players[0].tracks[1].title, None);
    assert!(s.players[1].tracks.is_empty());
    assert_eq!(s.bridge.target.as_str(), "right");
    assert_eq!(s.logging.level, "debug");
    assert!(s.logging.enabled);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ENCORE__AUDIO__QUIT_FADE_OUT_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
}

#[test]
fn validate_rejects_duplicate_player_ids() {
    let mut s = Settings::default();
    s.players.push(PlayerSettings::default());
    let err = s.validate().unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("duplicate player id `1`")));
}

#[test]
fn validate_rejects_bridge_target_without_player() {
    let mut s = Settings::default();
    s.bridge.target = PlayerId::new("9");
    assert!(matches!(s.validate(), Err(Error::UnknownPlayer(id)) if id.as_str() == "9"));
}

#[test]
fn config_file_with_unknown_bridge_target_fails_validation() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[[players]]
id = "left"

[[players.tracks]]
source = "a.mp3"

[bridge]
target = "nope"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());

    // The file itself parses; only the topology is wrong.
    let s = Settings::load().unwrap();
    assert_eq!(s.players[0].id.as_str(), "left");
    assert!(matches!(s.validate(), Err(Error::UnknownPlayer(id)) if id.as_str() == "nope"));
}

#[test]
fn validate_rejects_empty_players_and_bad_volume() {
    let mut s = Settings::default();
    s.players.clear();
    assert!(matches!(s.validate(), Err(Error::Config(_))));

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.initial_volume = 1.5;
    assert!(s.validate().is_err());
}
