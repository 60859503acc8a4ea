use crate::commands::common::GlobalOptions;
use crate::core::formula::{self, evaluate};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use serde_json::json;

/// Evaluate a single formula against the given operands
pub fn execute(matches: &ArgMatches, options: &GlobalOptions) -> Result<()> {
    let formula_str = matches
        .get_one::<String>("formula")
        .context("Formula argument is required")?;
    let value = *matches.get_one::<f64>("value").context("--value is required")?;
    let total = matches.get_one::<f64>("total").copied().unwrap_or(0.0);

    let result = evaluate(formula_str, value, total)?;

    if options.json {
        let out = json!({
            "formula": formula_str,
            "expression": formula::substitute(formula_str, value, total),
            "result": result,
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!(
            "{} {}",
            formula::substitute(formula_str, value, total).dimmed(),
            format!("= {}", result).cyan().bold()
        );
    }

    Ok(())
}
