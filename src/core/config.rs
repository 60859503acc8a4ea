use crate::core::registry::MetricsRegistry;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured registry path
pub const REGISTRY_ENV_VAR: &str = "METRICCONV_REGISTRY";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Registry file used when no `--registry` flag is given
    #[serde(default)]
    pub registry_path: Option<String>,
}

/// Where the active registry came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Flag(PathBuf),
    Env(PathBuf),
    Config(PathBuf),
    Builtin,
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Flag(p) => write!(f, "{} (--registry)", p.display()),
            RegistrySource::Env(p) => write!(f, "{} (${})", p.display(), REGISTRY_ENV_VAR),
            RegistrySource::Config(p) => write!(f, "{} (config)", p.display()),
            RegistrySource::Builtin => write!(f, "built-in"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // Empty or corrupted files fall back to defaults
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            debug!("Ignoring unreadable config {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("metricconv"))
    }

    fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Default location for `registry init`
    pub fn default_registry_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("registry.json"))
    }

    pub fn set_registry_path(&mut self, path: String) {
        self.registry_path = Some(path);
    }

    pub fn get_registry_path(&self) -> Option<&String> {
        self.registry_path.as_ref()
    }

    /// Pick the registry source: flag, then environment, then config, then built-in
    pub fn registry_source(&self, flag: Option<&str>) -> RegistrySource {
        if let Some(path) = flag {
            return RegistrySource::Flag(PathBuf::from(path));
        }

        if let Ok(path) = env::var(REGISTRY_ENV_VAR) {
            if !path.trim().is_empty() {
                return RegistrySource::Env(PathBuf::from(path));
            }
        }

        match &self.registry_path {
            Some(path) => RegistrySource::Config(PathBuf::from(path)),
            None => RegistrySource::Builtin,
        }
    }

    /// Load the registry from the resolved source
    pub fn load_registry(&self, flag: Option<&str>) -> Result<(MetricsRegistry, RegistrySource)> {
        let source = self.registry_source(flag);
        let registry = load_registry_from(&source)?;
        Ok((registry, source))
    }
}

pub fn load_registry_from(source: &RegistrySource) -> Result<MetricsRegistry> {
    debug!("Using metrics registry: {}", source);
    match source {
        RegistrySource::Flag(path) | RegistrySource::Env(path) | RegistrySource::Config(path) => {
            MetricsRegistry::load(path)
                .with_context(|| format!("Failed to load metrics registry: {}", path.display()))
        }
        RegistrySource::Builtin => {
            MetricsRegistry::builtin().context("Built-in metrics registry is invalid")
        }
    }
}
