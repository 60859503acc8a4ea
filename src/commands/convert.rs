//! Conversion command handlers.
//!
//! Sample values arrive as text and are coerced permissively, the same way
//! values scraped from other tools are handled.

use crate::commands::common::{byte_count, GlobalOptions};
use crate::core::coerce::string_to_float;
use crate::core::convert::{convert_capacity, convert_percentage};
use crate::core::registry::{kind, unit};
use crate::ui::{dimmed, format_reading_lines, format_value};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use serde_json::json;

/// Convert used vs total cores into a percentage
pub fn execute_cpu(matches: &ArgMatches, options: &GlobalOptions) -> Result<()> {
    let used = float_arg(matches, "used")?;
    let total = float_arg(matches, "total")?;

    let (registry, source) = options.load_registry()?;
    let percent = convert_percentage(&registry, used, total)
        .with_context(|| format!("CPU conversion failed using registry {}", source))?;

    if options.json {
        let out = json!({
            "kind": kind::CPU,
            "value": percent,
            "unit": unit::PERCENTAGE,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "CPU:".white().bold(),
        format_value(percent, unit::PERCENTAGE).cyan().bold()
    );
    dimmed(&format!("registry: {}", source));

    Ok(())
}

/// Convert used/total/free bytes for `metric_kind`
pub fn execute_capacity(
    matches: &ArgMatches,
    options: &GlobalOptions,
    metric_kind: &str,
) -> Result<()> {
    let used = byte_count(matches, "used")?;
    let total = byte_count(matches, "total")?;
    let free = byte_count(matches, "free")?;

    let (registry, source) = options.load_registry()?;
    let reading = convert_capacity(&registry, metric_kind, used, total, free).with_context(|| {
        format!("{} conversion failed using registry {}", metric_kind, source)
    })?;

    if options.json {
        let out = json!({
            "kind": metric_kind,
            "used": reading.used,
            "total": reading.total,
            "free": reading.free,
            "unit": reading.unit,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!("{}", format!("{}:", metric_kind).white().bold());
    for (label, text) in format_reading_lines(&reading) {
        println!("  {:<6} {}", label, text.cyan());
    }
    if reading.is_bytes() {
        dimmed(&format!(
            "No {} formula configured, values shown in Bytes",
            metric_kind
        ));
    }
    dimmed(&format!("registry: {}", source));

    Ok(())
}

/// `capacity --kind <KIND>` entry point
pub fn execute_any(matches: &ArgMatches, options: &GlobalOptions) -> Result<()> {
    let metric_kind = matches
        .get_one::<String>("kind")
        .context("--kind is required")?;
    execute_capacity(matches, options, metric_kind)
}

fn float_arg(matches: &ArgMatches, name: &str) -> Result<f64> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))?;
    Ok(string_to_float(raw.trim()))
}
