// Tests for the percentage and capacity converters against whole registries

use metricconv::core::registry::{kind, unit};
use metricconv::{
    convert_capacity, convert_disk, convert_memory, convert_percentage, evaluate, ConvError,
    MetricDefinition, MetricsRegistry,
};
use std::sync::Arc;
use std::thread;

const PERCENT: &str = "(#VALUE/#TOTAL_VALUE)*100";

fn host_registry() -> MetricsRegistry {
    MetricsRegistry::from(vec![
        MetricDefinition::new("CPU", "Percentage", PERCENT).with_short_code("CPU_PCT"),
        MetricDefinition::new("Memory", "MiB", "#VALUE / 1048576").with_short_code("MEM_MIB"),
        MetricDefinition::new("Disk", "Percentage", PERCENT).with_short_code("DISK_PCT"),
    ])
}

#[test]
fn test_percentage_equals_direct_evaluation() {
    let registry = host_registry();
    for (used, total) in [(0.0, 4.0), (1.0, 3.0), (7.5, 8.0), (12.0, 12.0), (0.33, 64.0)] {
        let converted = convert_percentage(&registry, used, total).unwrap();
        assert_eq!(converted, evaluate(PERCENT, used, total).unwrap());
    }
}

#[test]
fn test_percentage_uses_first_definition_in_order() {
    let registry = MetricsRegistry::from(vec![
        MetricDefinition::new("CPU", "Percentage", PERCENT),
        MetricDefinition::new("CPU", "Percentage", "#VALUE * 1000"),
    ]);
    assert_eq!(convert_percentage(&registry, 1.0, 2.0).unwrap(), 50.0);

    let reversed = MetricsRegistry::from(vec![
        MetricDefinition::new("CPU", "Percentage", "#VALUE * 1000"),
        MetricDefinition::new("CPU", "Percentage", PERCENT),
    ]);
    assert_eq!(convert_percentage(&reversed, 1.0, 2.0).unwrap(), 1000.0);
}

#[test]
fn test_percentage_missing_config_is_an_error() {
    // Unlike capacity conversion there is no fallback for percentages
    let registry = MetricsRegistry::default();
    match convert_percentage(&registry, 1.0, 2.0) {
        Err(ConvError::ConfigNotFound { kind }) => assert_eq!(kind, "CPU"),
        other => panic!("expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_memory_in_mib() {
    let registry = host_registry();
    let reading = convert_memory(&registry, 3 * 1_048_576, 8 * 1_048_576, 5 * 1_048_576).unwrap();
    assert_eq!((reading.used, reading.total, reading.free), (3.0, 8.0, 5.0));
    assert_eq!(reading.unit, "MiB");
}

#[test]
fn test_disk_percentage_total_becomes_hundred() {
    let registry = host_registry();
    let reading = convert_disk(&registry, 512, 1024, 512).unwrap();
    assert_eq!((reading.used, reading.total, reading.free), (50.0, 100.0, 50.0));
    assert_eq!(reading.unit, "Percentage");
}

#[test]
fn test_unknown_kind_falls_back_to_bytes() {
    let registry = host_registry();
    let reading = convert_capacity(&registry, "Swap", 10, 30, 20).unwrap();
    assert_eq!((reading.used, reading.total, reading.free), (10.0, 30.0, 20.0));
    assert_eq!(reading.unit, unit::BYTES);
}

#[test]
fn test_empty_registry_falls_back_to_bytes() {
    let registry = MetricsRegistry::default();
    let reading = convert_capacity(&registry, kind::MEMORY, 1, 2, 1).unwrap();
    assert!(reading.is_bytes());
}

fn formula_reason(err: ConvError) -> String {
    match err {
        ConvError::Formula { reason, .. } => reason,
        other => panic!("expected a formula error, got {other:?}"),
    }
}

#[test]
fn test_capacity_error_uses_first_failing_evaluation() {
    // A tuple is rejected with its rendered value, so each of the three
    // evaluations fails with a different reason
    let registry = MetricsRegistry::from(vec![MetricDefinition::new(
        "Disk",
        "Pair",
        "(#VALUE, #TOTAL_VALUE)",
    )]);
    let reason = formula_reason(convert_disk(&registry, 1, 4, 3).unwrap_err());
    assert!(reason.contains("(1"), "unexpected reason: {reason}");
    assert!(!reason.contains("(4"));
    assert!(!reason.contains("(3"));
}

#[test]
fn test_capacity_error_when_only_free_fails() {
    // used=1 and total=4 evaluate fine, free=3 divides by zero
    let formula = "#TOTAL_VALUE / (#VALUE - 3)";
    let registry = MetricsRegistry::from(vec![MetricDefinition::new("Disk", "Ratio", formula)]);

    assert_eq!(evaluate(formula, 1.0, 4.0).unwrap(), -2.0);
    assert_eq!(evaluate(formula, 4.0, 4.0).unwrap(), 4.0);

    let result = convert_disk(&registry, 1, 4, 3);
    let err = result.unwrap_err();
    assert!(err.is_formula());
    assert!(err.to_string().contains(formula));
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(host_registry());
    let expected = convert_memory(&registry, 1_048_576, 2_097_152, 1_048_576).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || convert_memory(&registry, 1_048_576, 2_097_152, 1_048_576).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_builtin_registry_gib_conversion() {
    let registry = MetricsRegistry::builtin().unwrap();
    let gib = 1_073_741_824u64;
    let reading = convert_memory(&registry, 6 * gib, 16 * gib, 10 * gib).unwrap();
    assert_eq!((reading.used, reading.total, reading.free), (6.0, 16.0, 10.0));
    assert_eq!(reading.unit, "GiB");
    assert_eq!(convert_percentage(&registry, 2.0, 8.0).unwrap(), 25.0);
}
