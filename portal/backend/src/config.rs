//! Portal Configuration

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Parser, Debug, Default)]
#[command(name = "medicare-portal")]
#[command(about = "MediCare appointment portal", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short, env = "MEDICARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address
    #[arg(long, env = "MEDICARE_BIND")]
    pub bind: Option<String>,

    /// Artificial delay of the simulated submission backend
    #[arg(long, env = "MEDICARE_SUBMISSION_DELAY_MS")]
    pub submission_delay_ms: Option<u64>,

    /// Make every submission fail
    #[arg(long)]
    pub simulate_failure: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub bind: String,
    pub submission_delay_ms: u64,
    pub simulate_failure: bool,
    pub notification_capacity: usize,
    pub log: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".into(),
            submission_delay_ms: 1000,
            simulate_failure: false,
            notification_capacity: 32,
            log: "info".into(),
        }
    }
}

impl PortalConfig {
    /// Read the file if it exists, otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Command line and environment take precedence over the file
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(bind) = &cli.bind {
            self.bind = bind.clone();
        }
        if let Some(delay) = cli.submission_delay_ms {
            self.submission_delay_ms = delay;
        }
        if cli.simulate_failure {
            self.simulate_failure = true;
        }
        if let Some(log) = &cli.log {
            self.log = log.clone();
        }
        self
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
