use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use crate::result::{
    humidity_in_range, FixedHumidity, HumiditySampler, RandomHumidity, TemperatureHumidity,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// How the humidity figure is produced: `"random"`, `"temperature"`, or a fixed number.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum HumidityMode {
    Fixed(f64),
    Named(String),
}

impl Default for HumidityMode {
    fn default() -> Self {
        HumidityMode::Named("random".to_string())
    }
}

impl HumidityMode {
    pub fn sampler(&self) -> Result<Arc<dyn HumiditySampler>> {
        match self {
            HumidityMode::Fixed(v) => {
                if !humidity_in_range(*v) {
                    anyhow::bail!("fixed humidity {v} outside [50, 80)");
                }
                Ok(Arc::new(FixedHumidity(*v)))
            }
            HumidityMode::Named(name) => match name.as_str() {
                "random" => Ok(Arc::new(RandomHumidity)),
                "temperature" => Ok(Arc::new(TemperatureHumidity)),
                other => anyhow::bail!("unknown humidity mode {other:?}"),
            },
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub backend: BackendConfig,
    pub humidity: HumidityMode,
    pub simulated_latency_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            humidity: HumidityMode::default(),
            simulated_latency_ms: 1500,
        }
    }
}

impl ServiceConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid config JSON in {}", path.display()))
    }

    /// Loads from the first candidate path that exists, defaults otherwise,
    /// then applies `HOST`/`PORT` from the environment.
    pub fn from_env() -> Result<Self> {
        let mut cfg = match resolve_config_path() {
            Some(path) => {
                tracing::info!("loading config from {}", path.display());
                Self::load(&path)?
            }
            None => {
                tracing::info!("no config file found; using defaults");
                Self::default()
            }
        };
        cfg.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;
        Ok(cfg)
    }

    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.backend.host = host;
        }
        if let Some(port) = port {
            self.backend.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port:?}"))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.backend.host, self.backend.port)
            .parse()
            .with_context(|| format!("bad bind address {}:{}", self.backend.host, self.backend.port))
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("RACE_CONFIG") {
        return Some(PathBuf::from(p));
    }

    let mut candidates = vec![PathBuf::from("config.json"), PathBuf::from("config/config.json")];
    if let Ok(mut exe) = std::env::current_exe() {
        exe.pop();
        exe.push("config.json");
        candidates.push(exe);
    }
    candidates.into_iter().find(|c| c.exists())
}
