//! Configuration file management for clipplan.
//!
//! Provides a TOML-based config file at `~/.config/clipplan/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Env var overriding the server bind address.
pub const BIND_ENV: &str = "CLIPPLAN_BIND";
/// Env var overriding the server port.
pub const PORT_ENV: &str = "CLIPPLAN_PORT";

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Page metadata rendered into the `<head>` of the planner page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    pub theme_color: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Agente TikTok Virale".to_string(),
            description: "Genera idee, script e copy per video virali su TikTok (<=10s)"
                .to_string(),
            theme_color: "#0f172a".to_string(),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the clipplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/clipplan` or `~/.config/clipplan`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("clipplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clipplan")
}

/// Return the path to the clipplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone)]
pub struct ClipplanConfig {
    pub bind: String,
    pub port: u16,
    pub site: SiteSection,
}

impl ClipplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Bind: `cli_bind` > `CLIPPLAN_BIND` env > `server.bind` > `DEFAULT_BIND`
    /// - Port: `cli_port` > `CLIPPLAN_PORT` env > `server.port` > `DEFAULT_PORT`
    /// - Site metadata: config file `[site]` > built-in defaults
    ///
    /// A config file that exists but cannot be parsed is an error; a missing
    /// file is not.
    pub fn resolve(cli_bind: Option<&str>, cli_port: Option<u16>) -> Result<Self> {
        let file_config = if config_path().exists() {
            Some(load_config()?)
        } else {
            None
        };

        let bind = if let Some(bind) = cli_bind {
            bind.to_string()
        } else if let Ok(bind) = std::env::var(BIND_ENV) {
            bind
        } else if let Some(ref cfg) = file_config {
            cfg.server.bind.clone()
        } else {
            DEFAULT_BIND.to_string()
        };

        let port = if let Some(port) = cli_port {
            port
        } else if let Ok(port) = std::env::var(PORT_ENV) {
            port.parse()
                .with_context(|| format!("{PORT_ENV} env var is not a valid port: {port:?}"))?
        } else if let Some(ref cfg) = file_config {
            cfg.server.port
        } else {
            DEFAULT_PORT
        };

        let site = file_config.map(|cfg| cfg.site).unwrap_or_default();

        Ok(Self { bind, port, site })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
