//! Metrics registry.
//!
//! The registry is an ordered list of metric definitions owned by the host.
//! Conversions only ever read it and always pick the first matching entry,
//! so the same registry and the same request resolve to the same definition.

use crate::core::formula;
use crate::error::{ConvError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in registry used when the host does not supply one
pub const DEFAULT_REGISTRY_JSON: &str = include_str!("../../default_registry.json");

/// Well-known metric kinds. The domain is open; hosts may use any string.
pub mod kind {
    pub const CPU: &str = "CPU";
    pub const MEMORY: &str = "Memory";
    pub const DISK: &str = "Disk";
}

/// Well-known display units
pub mod unit {
    pub const PERCENTAGE: &str = "Percentage";
    pub const BYTES: &str = "Bytes";
}

/// How a metric is converted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFormulaSpec {
    #[serde(default)]
    pub short_code: String,
    #[serde(default)]
    pub description: String,
    /// Expression using `#VALUE` and `#TOTAL_VALUE`
    #[serde(default)]
    pub formula: String,
}

/// A single registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Resource category (CPU, Memory, Disk, ...)
    #[serde(rename = "metrics")]
    pub kind: String,
    /// Display unit attached to converted values
    #[serde(rename = "baseUnit")]
    pub base_unit: String,
    #[serde(rename = "metricsConfig")]
    pub formula_spec: MetricFormulaSpec,
}

impl MetricDefinition {
    pub fn new<K, U, F>(kind: K, base_unit: U, formula: F) -> Self
    where
        K: Into<String>,
        U: Into<String>,
        F: Into<String>,
    {
        Self {
            kind: kind.into(),
            base_unit: base_unit.into(),
            formula_spec: MetricFormulaSpec {
                formula: formula.into(),
                ..Default::default()
            },
        }
    }

    pub fn with_short_code<S: Into<String>>(mut self, short_code: S) -> Self {
        self.formula_spec.short_code = short_code.into();
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.formula_spec.description = description.into();
        self
    }

    pub fn formula(&self) -> &str {
        &self.formula_spec.formula
    }
}

/// A definition whose formula failed every sample evaluation
#[derive(Debug)]
pub struct FormulaIssue {
    /// Position in the registry
    pub index: usize,
    pub kind: String,
    pub error: ConvError,
}

const VALIDATION_SAMPLES: &[(f64, f64)] = &[(1.0, 1.0), (3.0, 7.0), (512.0, 1024.0)];

/// Ordered, read-only collection of metric definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsRegistry {
    definitions: Vec<MetricDefinition>,
}

impl MetricsRegistry {
    pub fn new(definitions: Vec<MetricDefinition>) -> Self {
        Self { definitions }
    }

    /// The registry embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(DEFAULT_REGISTRY_JSON)
    }

    /// Parse a registry from a JSON array of definitions
    pub fn from_json_str(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        Ok(registry)
    }

    /// Load a registry from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let registry = Self::from_json_str(&data)?;
        debug!(
            "Loaded {} metric definition(s) from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First definition, in registry order, accepted by `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&MetricDefinition>
    where
        P: FnMut(&&MetricDefinition) -> bool,
    {
        self.definitions.iter().find(predicate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricDefinition> {
        self.definitions.iter()
    }

    pub fn definitions(&self) -> &[MetricDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Evaluate every formula at a few `(value, total)` sample points.
    ///
    /// Returns one issue per definition whose formula does not evaluate to a
    /// number at any of them, carrying the error from the first point. A
    /// formula that is only undefined at one point (such as
    /// `#TOTAL_VALUE / (#VALUE - 1)`) is not reported. Definitions without a
    /// formula are skipped.
    pub fn validate(&self) -> Vec<FormulaIssue> {
        self.definitions
            .iter()
            .enumerate()
            .filter(|(_, def)| !def.formula().is_empty())
            .filter_map(|(index, def)| {
                let mut first_error = None;
                for &(value, total) in VALIDATION_SAMPLES {
                    match formula::evaluate(def.formula(), value, total) {
                        Ok(_) => return None,
                        Err(e) => {
                            first_error.get_or_insert(e);
                        }
                    }
                }
                first_error.map(|error| FormulaIssue {
                    index,
                    kind: def.kind.clone(),
                    error,
                })
            })
            .collect()
    }
}

impl From<Vec<MetricDefinition>> for MetricsRegistry {
    fn from(definitions: Vec<MetricDefinition>) -> Self {
        Self::new(definitions)
    }
}

impl FromIterator<MetricDefinition> for MetricsRegistry {
    fn from_iter<I: IntoIterator<Item = MetricDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MetricsRegistry {
    type Item = &'a MetricDefinition;
    type IntoIter = std::slice::Iter<'a, MetricDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
