use chart_config_rs::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_bootstrap_is_a_noop_without_the_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_bootstrap_installs_a_subscriber_once() {
    // First call installs the global subscriber; later calls report false.
    assert!(init_default_tracing());
    assert!(!init_default_tracing());
}
