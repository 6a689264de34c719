//! Configuration management for alertmail
//!
//! This module defines the main `Config` struct, responsible for holding all
//! application settings. It uses the `figment` crate to layer built-in
//! defaults, an optional TOML file, `ALERTMAIL_` environment variables and
//! command-line overrides, in that order.

use crate::cli::Cli;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix for configuration overrides, e.g. `ALERTMAIL_LOG_LEVEL=debug`.
pub const CONFIG_ENV_PREFIX: &str = "ALERTMAIL_";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Directory searched for per-type templates before the builtin ones.
    pub template_dir: Option<PathBuf>,
    /// Template file extension; files are named `<type>.<extension>`.
    pub template_extension: String,
    /// Prefix of the monitoring daemon's environment variables.
    pub env_prefix: String,
    /// Variable holding the default recipient.
    pub contact_variable: String,
    /// Configuration for the `--updates` check.
    pub update_check: UpdateCheckConfig,
}

/// Configuration for the release check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UpdateCheckConfig {
    /// Base URL of the crate registry.
    pub registry_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Config {
    /// Loads the application configuration.
    ///
    /// The file named by `--config` is optional; when given it must parse.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = &cli.config {
            // figment silently skips missing files
            if !path.is_file() {
                anyhow::bail!("configuration file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment
            // Nested keys use a double underscore, e.g. ALERTMAIL_UPDATE_CHECK__TIMEOUT_SECONDS=5
            .merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            template_dir: None,
            template_extension: "html.hbs".to_string(),
            env_prefix: "NAGIOS_".to_string(),
            contact_variable: "NAGIOS_CONTACTEMAIL".to_string(),
            update_check: UpdateCheckConfig {
                registry_url: "https://crates.io".to_string(),
                timeout_seconds: 10,
            },
        }
    }
}
