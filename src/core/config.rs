//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::device::{Orientation, Platform};
use crate::core::transition::DEFAULT_TRANSITION_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavstackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigatorConfig {
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub platform: Option<Platform>,
    pub orientation: Option<Orientation>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub dpi: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub home_text: Option<String>,
    pub palette: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_HOME_TEXT: &str = "Home Screen";
pub const DEFAULT_DISPLAY_WIDTH: f32 = 750.0;
pub const DEFAULT_DISPLAY_HEIGHT: f32 = 1334.0;
pub const DEFAULT_DISPLAY_DPI: f32 = 326.0;
pub const DEFAULT_PALETTE: &[&str] = &["red", "green", "white", "navy"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: String,
    pub transition_ms: u64,
    pub platform: Platform,
    pub orientation: Orientation,
    pub display_width: f32,
    pub display_height: f32,
    pub display_dpi: f32,
    pub home_text: String,
    pub palette: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navstack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navstack").join("config.toml"))
}

/// Load config from `~/.navstack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavstackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavstackConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(NavstackConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default file if missing.
pub fn load_config_from(path: &Path) -> Result<NavstackConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NavstackConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavstackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# navstack configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"

# [navigator]
# transition_ms = 300                # Or set NAVSTACK_TRANSITION_MS env var

# [display]
# platform = "ios"                   # "ios" or "android"
# orientation = "portrait"           # "portrait" or "landscape"
# width = 750
# height = 1334
# dpi = 326

# [demo]
# home_text = "Home Screen"          # Or set NAVSTACK_HOME_TEXT env var
# palette = ["red", "green", "white", "navy"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_home_text` and `cli_transition_ms` are from CLI flags (None = not specified).
pub fn resolve(
    config: &NavstackConfig,
    cli_home_text: Option<&str>,
    cli_transition_ms: Option<u64>,
) -> ResolvedConfig {
    // Transition length: CLI → env → config → default
    let transition_ms = cli_transition_ms
        .or_else(|| env_parse("NAVSTACK_TRANSITION_MS"))
        .or(config.navigator.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);

    // Home label: CLI → env → config → default
    let home_text = cli_home_text
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NAVSTACK_HOME_TEXT").ok())
        .or_else(|| config.demo.home_text.clone())
        .unwrap_or_else(|| DEFAULT_HOME_TEXT.to_string());

    // Log level: env → config → default
    let log_level = std::env::var("NAVSTACK_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // An empty palette would leave nothing to cycle through
    let palette = match &config.demo.palette {
        Some(colors) if !colors.is_empty() => colors.clone(),
        _ => DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
    };

    ResolvedConfig {
        log_level,
        transition_ms,
        platform: config.display.platform.unwrap_or_default(),
        orientation: config.display.orientation.unwrap_or_default(),
        display_width: config.display.width.unwrap_or(DEFAULT_DISPLAY_WIDTH),
        display_height: config.display.height.unwrap_or(DEFAULT_DISPLAY_HEIGHT),
        display_dpi: config.display.dpi.unwrap_or(DEFAULT_DISPLAY_DPI),
        home_text,
        palette,
    }
}

fn env_parse(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
