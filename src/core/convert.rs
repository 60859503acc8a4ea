//! Metric converters built on the formula evaluator and the registry.

use crate::core::formula::{evaluate, round_two};
use crate::core::registry::{kind, unit, MetricsRegistry};
use crate::error::{ConvError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Converted used/total/free triple with its display unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityReading {
    pub used: f64,
    pub total: f64,
    pub free: f64,
    pub unit: String,
}

impl CapacityReading {
    /// True when no formula applied and the values are raw byte counts
    pub fn is_bytes(&self) -> bool {
        self.unit == unit::BYTES
    }
}

/// Convert used vs total cores to a percentage.
///
/// Uses the first `CPU` definition whose unit is `Percentage`. There is no
/// fallback: without such a definition the call fails with
/// [`ConvError::ConfigNotFound`].
pub fn convert_percentage(
    registry: &MetricsRegistry,
    used_cores: f64,
    total_cores: f64,
) -> Result<f64> {
    let definition = registry
        .find(|d| d.kind == kind::CPU && d.base_unit == unit::PERCENTAGE)
        .ok_or_else(|| ConvError::config_not_found(kind::CPU))?;

    debug!(
        "Resolved CPU percentage formula '{}'",
        definition.formula()
    );
    evaluate(definition.formula(), used_cores, total_cores)
}

/// Convert used/total/free byte counts for `metric_kind` into its display unit.
///
/// The first definition of that kind with a non-empty formula and a unit
/// other than `Bytes` is applied to all three values, each measured against
/// `total`. Without one, the byte counts are returned as-is in `Bytes`.
pub fn convert_capacity(
    registry: &MetricsRegistry,
    metric_kind: &str,
    used: u64,
    total: u64,
    free: u64,
) -> Result<CapacityReading> {
    let definition = registry.find(|d| {
        d.kind == metric_kind && !d.formula().is_empty() && d.base_unit != unit::BYTES
    });

    let Some(definition) = definition else {
        debug!("No {} formula configured, keeping values in Bytes", metric_kind);
        return Ok(CapacityReading {
            used: round_two(used as f64),
            total: round_two(total as f64),
            free: round_two(free as f64),
            unit: unit::BYTES.to_string(),
        });
    };

    debug!(
        "Resolved {} formula '{}' ({})",
        metric_kind,
        definition.formula(),
        definition.base_unit
    );

    let formula = definition.formula();
    let reference = total as f64;

    let used = evaluate(formula, used as f64, reference)?;
    let total = evaluate(formula, total as f64, reference)?;
    let free = evaluate(formula, free as f64, reference)?;

    Ok(CapacityReading {
        used,
        total,
        free,
        unit: definition.base_unit.clone(),
    })
}

/// [`convert_capacity`] for `Memory`
pub fn convert_memory(
    registry: &MetricsRegistry,
    used: u64,
    total: u64,
    free: u64,
) -> Result<CapacityReading> {
    convert_capacity(registry, kind::MEMORY, used, total, free)
}

/// [`convert_capacity`] for `Disk`
pub fn convert_disk(
    registry: &MetricsRegistry,
    used: u64,
    total: u64,
    free: u64,
) -> Result<CapacityReading> {
    convert_capacity(registry, kind::DISK, used, total, free)
}
