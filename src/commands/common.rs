use crate::core::coerce::{parse_memory_string, string_to_u64};
use crate::core::config::{Config, RegistrySource};
use crate::core::registry::MetricsRegistry;
use anyhow::{Context, Result};
use clap::ArgMatches;

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub registry: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

impl GlobalOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            registry: matches.get_one::<String>("registry").cloned(),
            json: matches.get_flag("json"),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Load the registry the user selected, falling back to the built-in one
    pub fn load_registry(&self) -> Result<(MetricsRegistry, RegistrySource)> {
        let config = Config::load()?;
        config.load_registry(self.registry.as_deref())
    }
}

/// Read a byte count argument.
///
/// Sizes with a unit suffix (`8GiB`) are parsed strictly; plain numbers go
/// through the permissive coercion, so `"1024.7"` is 1024 and garbage is 0.
pub fn byte_count(matches: &ArgMatches, name: &str) -> Result<u64> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))?;

    if raw.chars().any(|c| c.is_ascii_alphabetic()) {
        parse_memory_string(raw).with_context(|| format!("Invalid size for --{}", name))
    } else {
        Ok(string_to_u64(raw.trim()))
    }
}
