use crate::commands::common::GlobalOptions;
use crate::core::config::Config;
use crate::core::registry::{MetricsRegistry, DEFAULT_REGISTRY_JSON};
use crate::ui::{dimmed, error, format_definition, success, warn};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use serde_json::json;
use std::fs;

pub fn execute(matches: &ArgMatches, options: &GlobalOptions) -> Result<()> {
    match matches.subcommand() {
        Some(("list", _)) => list(options),
        Some(("check", _)) => check(options),
        Some(("init", sub_matches)) => init(sub_matches.get_flag("force")),
        _ => {
            println!("Use 'metricconv registry --help' for more information.");
            Ok(())
        }
    }
}

fn list(options: &GlobalOptions) -> Result<()> {
    let (registry, source) = options.load_registry()?;

    if options.json {
        println!("{}", registry.to_json_pretty()?);
        return Ok(());
    }

    if registry.is_empty() {
        warn("Registry has no metric definitions");
        return Ok(());
    }

    println!(
        "{} {}",
        "Metric definitions:".white().bold(),
        format!("({} total, first match wins)", registry.len()).dimmed()
    );
    println!();

    for (idx, definition) in registry.iter().enumerate() {
        println!("  {}. {}", idx + 1, format_definition(definition).cyan());
        let spec = &definition.formula_spec;
        if !spec.short_code.is_empty() || !spec.description.is_empty() {
            println!("     {}", format!("{} {}", spec.short_code, spec.description).dimmed());
        }
    }

    println!();
    dimmed(&format!("registry: {}", source));
    Ok(())
}

fn check(options: &GlobalOptions) -> Result<()> {
    let (registry, source) = options.load_registry()?;
    let issues = registry.validate();

    if options.json {
        let out: Vec<_> = issues
            .iter()
            .map(|issue| {
                json!({
                    "index": issue.index,
                    "kind": issue.kind,
                    "error": issue.error.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string(&out)?);
    } else if issues.is_empty() {
        success(&format!(
            "✓ All {} definition(s) evaluate cleanly ({})",
            registry.len(),
            source
        ));
    } else {
        for issue in &issues {
            error(&format!(
                "✗ #{} {}: {}",
                issue.index + 1,
                issue.kind,
                issue.error
            ));
        }
    }

    if !issues.is_empty() {
        bail!("{} invalid formula(s) in registry {}", issues.len(), source);
    }

    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = Config::default_registry_path()?;

    if path.exists() && !force {
        warn(&format!(
            "Registry already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    // Make sure the embedded copy is valid before writing it anywhere
    MetricsRegistry::builtin().context("Built-in metrics registry is invalid")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }
    fs::write(&path, DEFAULT_REGISTRY_JSON)
        .with_context(|| format!("Failed to write registry file: {:?}", path))?;

    let mut config = Config::load()?;
    config.set_registry_path(path.to_string_lossy().to_string());
    config.save()?;

    success(&format!("✓ Registry written to {}", path.display()));
    Ok(())
}
