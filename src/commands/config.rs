use crate::commands::common::GlobalOptions;
use crate::core::config::{load_registry_from, Config, RegistrySource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("registry", sub_matches)) => set_registry_path(sub_matches),
        _ => {
            println!("Use 'metricconv set --help' for more information.");
            Ok(())
        }
    }
}

fn set_registry_path(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;

    let path_buf = Path::new(path);
    if !path_buf.is_file() {
        println!(
            "{}",
            format!("⚠️  Warning: Registry file '{}' does not exist", path).yellow()
        );
        println!(
            "{}",
            "The path will be saved but conversions will fail until it is created.".dimmed()
        );
    }

    let canonical_path = if path_buf.exists() {
        // Refuse to remember a file that is not a usable registry
        load_registry_from(&RegistrySource::Config(path_buf.to_path_buf()))?;

        path_buf
            .canonicalize()
            .map_err(|e| anyhow::anyhow!("Failed to resolve path: {}", e))?
            .to_string_lossy()
            .to_string()
    } else {
        path.to_string()
    };

    let mut config = Config::load()?;
    config.set_registry_path(canonical_path.clone());
    config.save()?;

    println!("{} {}", "✓ Registry path set to:".green(), canonical_path);

    Ok(())
}

pub fn handle_get(matches: &clap::ArgMatches, options: &GlobalOptions) -> Result<()> {
    match matches.subcommand() {
        Some(("registry", _)) => get_registry_path(options),
        _ => {
            println!("Use 'metricconv get --help' for more information.");
            Ok(())
        }
    }
}

fn get_registry_path(options: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let source = config.registry_source(options.registry.as_deref());

    println!("{}", "Active metrics registry:".white());
    println!("{}", source.to_string().cyan().bold());

    if source == RegistrySource::Builtin {
        println!();
        println!("{}", "To use your own registry, run:".white());
        println!("  {}", "metricconv set registry <path>".cyan().bold());
        println!("  {}", "metricconv registry init".cyan().bold());
    }

    Ok(())
}
