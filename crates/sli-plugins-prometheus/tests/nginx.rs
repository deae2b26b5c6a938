// crates/sli-plugins-prometheus/tests/nginx.rs
// ============================================================================
// Module: Nginx Ingress Plugin Tests
// Description: Validation and rendered output of the nginx-bound plugins.
// Purpose: Ensure the fixed ingress metric names and labels render intact.
// ============================================================================

//! Validates the nginx availability and latency plugins.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use sli_plugins_core::LabelSet;
use sli_plugins_core::OptionsMap;
use sli_plugins_core::SliPlugin;
use sli_plugins_core::SloMetadata;
use sli_plugins_prometheus::PluginSpec;
use sli_plugins_prometheus::nginx;

fn evaluate(
    plugin: &PluginSpec,
    options: &OptionsMap,
) -> Result<String, sli_plugins_core::EvaluationError> {
    plugin.evaluate(&SloMetadata::new(), &LabelSet::new(), options)
}

fn options(pairs: &[(&str, &str)]) -> OptionsMap {
    pairs.iter().copied().collect()
}

// ============================================================================
// SECTION: Availability
// ============================================================================

/// Verifies the service name regex is mandatory.
#[test]
fn nginx_availability_requires_service_name() {
    let plugin = nginx::availability_plugin();
    let err = evaluate(&plugin, &OptionsMap::new()).unwrap_err();
    assert_eq!(err.to_string(), "error parsing options: 'service_name_regex' is required");
}

/// Verifies the ingress-bound availability query renders with a filter.
#[test]
fn nginx_availability_renders_with_filter() {
    let plugin = nginx::availability_plugin();
    let query = evaluate(
        &plugin,
        &options(&[("service_name_regex", "test"), ("filter", r#"k1="v2""#)]),
    )
    .unwrap();
    assert_eq!(
        query,
        r#"
(
	sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ k1="v2",exported_service=~"test", status=~"(5..|429|431)" }[{{ .window }}])
	)
	/
	(sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ k1="v2",exported_service=~"test" }[{{ .window }}])
	) > 0)
) OR on() vector(0)
"#
    );
}

// ============================================================================
// SECTION: Latency
// ============================================================================

/// Verifies the bucket option is required and numeric.
#[test]
fn nginx_latency_requires_numeric_bucket() {
    let plugin = nginx::latency_plugin();
    let err = evaluate(&plugin, &options(&[("service_name_regex", "test")])).unwrap_err();
    assert_eq!(err.to_string(), "error parsing options: 'bucket' option is required");
}

/// Verifies the ingress-bound latency query renders without a filter.
#[test]
fn nginx_latency_renders_inverted_ratio() {
    let plugin = nginx::latency_plugin();
    let query = evaluate(
        &plugin,
        &options(&[("service_name_regex", "test"), ("bucket", "0.25")]),
    )
    .unwrap();
    assert_eq!(
        query,
        r#"
1 - ((
	sum(
		rate(nginx_ingress_controller_request_duration_seconds_bucket{ exported_service=~"test", le="0.25" }[{{ .window }}])
	)
	/
	(sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ exported_service=~"test" }[{{ .window }}])
	) > 0)
) OR on() vector(1))
"#
    );
}
