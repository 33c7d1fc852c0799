//! Shared configuration for the Alfamind TUI.
//!
//! One TOML file layered with `ALFAMIND_*` environment overrides through
//! figment, plus translation helpers into `alfamind_core` types. The
//! core crate never reads config files; everything funnels through here.
//!
//! Environment keys use `__` between sections, e.g.
//! `ALFAMIND_STORE__NAME` or `ALFAMIND_UI__SPLASH_MS`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use alfamind_core::{SPLASH_DURATION, StoreProfile};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Store branding shown on the Home profile card.
    #[serde(default)]
    pub store: StoreSection,

    /// Presentation knobs.
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StoreSection {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_owner_name")]
    pub owner: String,

    #[serde(default = "default_owner_email")]
    pub email: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            owner: default_owner_name(),
            email: default_owner_email(),
        }
    }
}

// Branding defaults come from the core crate so the card and the config
// file never disagree about what "unconfigured" looks like.
fn default_store_name() -> String {
    StoreProfile::default().store_name
}
fn default_owner_name() -> String {
    StoreProfile::default().owner_name
}
fn default_owner_email() -> String {
    StoreProfile::default().owner_email
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiSection {
    /// Skip the crossfade between screens.
    #[serde(default)]
    pub reduce_motion: bool,

    /// Splash screen duration override in milliseconds. Unset means the
    /// stock 3000 ms.
    pub splash_ms: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "alfamind", "alfamind").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("alfamind");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the Config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_at(&config_path())
}

/// Load the Config from an explicit file + environment.
pub fn load_config_at(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ALFAMIND_").split("__"));

    let config: Config = figment.extract()?;
    validate(&config)?;
    Ok(config)
}

/// Load config, returning a default if loading fails for any reason.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.ui.splash_ms == Some(0) {
        return Err(ConfigError::Validation {
            field: "ui.splash_ms".into(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

/// Serialize config to TOML and write it to an explicit path, creating
/// parent directories as needed.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core types ───────────────────────────────────────

/// Build the [`StoreProfile`] shown on the Home screen.
pub fn store_profile(cfg: &Config) -> StoreProfile {
    StoreProfile {
        store_name: cfg.store.name.clone(),
        owner_name: cfg.store.owner.clone(),
        owner_email: cfg.store.email.clone(),
    }
}

/// Effective splash delay: the configured override, or the stock 3000 ms.
pub fn splash_duration(cfg: &Config) -> Duration {
    cfg.ui.splash_ms.map_or(SPLASH_DURATION, Duration::from_millis)
}
