//! Backend configuration
//!
//! Defaults overlaid by process environment variables (`NODE_ENV`,
//! `BACKEND_PORT`, ...).

use anyhow::{bail, Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

/// Names containing any of these are never logged
const SENSITIVE_MARKERS: [&str; 3] = ["PASSWORD", "SECRET", "TOKEN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub node_env: String,
    /// Free-form (`true`, `app:*`, ...); only logged
    pub debug: String,
    pub backend_host: String,
    pub backend_port: u16,
    pub rpc_port: u16,
    pub cors_origin: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("node_env", "development")?
            .set_default("debug", "false")?
            .set_default("backend_host", "0.0.0.0")?
            .set_default("backend_port", 3001)?
            .set_default("rpc_port", 3002)?
            .set_default("cors_origin", "*")?
            .set_default("log_level", "info")?
            .set_default("log_format", "pretty")?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration value")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.backend_port == self.rpc_port {
            bail!(
                "BACKEND_PORT and RPC_PORT must differ (both are {})",
                self.backend_port
            );
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.node_env == "development"
    }
}

/// Environment variables safe to print, sorted by name
pub fn loggable_env_vars(vars: impl IntoIterator<Item = (String, String)>) -> Vec<(String, String)> {
    let mut safe: Vec<_> = vars
        .into_iter()
        .filter(|(name, _)| {
            let upper = name.to_uppercase();
            !SENSITIVE_MARKERS.iter().any(|marker| upper.contains(marker))
        })
        .collect();
    safe.sort();
    safe
}
