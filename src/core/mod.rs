// Core conversion logic

pub mod coerce;
pub mod config;
pub mod convert;
pub mod formula;
pub mod registry;

// Re-export commonly used items
pub use coerce::{parse_memory_string, string_to_float, string_to_int, string_to_u64};
pub use config::{Config, RegistrySource};
pub use convert::{convert_capacity, convert_disk, convert_memory, convert_percentage, CapacityReading};
pub use formula::{evaluate, round_two};
pub use registry::{FormulaIssue, MetricDefinition, MetricFormulaSpec, MetricsRegistry};
