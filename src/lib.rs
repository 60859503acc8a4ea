// metricconv library - public API

// Re-export error types
pub mod error;
pub use error::{ConvError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;
pub use core::{
    convert_capacity, convert_disk, convert_memory, convert_percentage, evaluate,
    parse_memory_string, round_two, string_to_float, string_to_int, string_to_u64,
    CapacityReading, MetricDefinition, MetricFormulaSpec, MetricsRegistry,
};

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
