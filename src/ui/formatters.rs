use crate::core::registry::{unit, MetricDefinition};
use crate::core::CapacityReading;
use humansize::{format_size, BINARY};

/// Format a converted value with its unit label
pub fn format_value(value: f64, unit_label: &str) -> String {
    match unit_label {
        unit::PERCENTAGE => format!("{:.2}%", value),
        _ => format!("{:.2} {}", value, unit_label),
    }
}

/// Human-readable size for a raw byte count (KiB, MiB, GiB, ...)
pub fn format_bytes_human(bytes: f64) -> String {
    if bytes.is_sign_negative() {
        return format!("{:.2} B", bytes);
    }
    format_size(bytes as u64, BINARY)
}

/// `(label, text)` pairs for the used/total/free fields of a reading
pub fn format_reading_lines(reading: &CapacityReading) -> Vec<(String, String)> {
    [("Used", reading.used), ("Total", reading.total), ("Free", reading.free)]
        .into_iter()
        .map(|(label, value)| {
            let mut text = format_value(value, &reading.unit);
            if reading.is_bytes() {
                text.push_str(&format!(" ({})", format_bytes_human(value)));
            }
            (label.to_string(), text)
        })
        .collect()
}

/// Short single-line description of a registry entry
pub fn format_definition(definition: &MetricDefinition) -> String {
    let formula = if definition.formula().is_empty() {
        "<none>"
    } else {
        definition.formula()
    };
    format!(
        "{:<8} {:<12} {}",
        definition.kind, definition.base_unit, formula
    )
}
