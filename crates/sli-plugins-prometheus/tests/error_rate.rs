// crates/sli-plugins-prometheus/tests/error_rate.rs
// ============================================================================
// Module: HTTP Error Rate Plugin Tests
// Description: Validation order and rendered output of http-error-rate.
// Purpose: Ensure the plugin validates options and emits the gated query.
// ============================================================================

//! Validates the http-error-rate plugin end to end.

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
use sli_plugins_prometheus::error_rate;

fn evaluate(options: &OptionsMap) -> Result<String, sli_plugins_core::EvaluationError> {
    error_rate::plugin().evaluate(&SloMetadata::new(), &LabelSet::new(), options)
}

fn options(pairs: &[(&str, &str)]) -> OptionsMap {
    pairs.iter().copied().collect()
}

/// Returns the full, valid option set the other cases perturb.
fn valid_options() -> OptionsMap {
    options(&[
        ("metricName", "http_request_duration_seconds_count"),
        ("serviceLabelName", "service"),
        ("serviceLabelValue", "test"),
        ("errorLabelName", "status_code"),
        ("errorLabelValue", "(5..|429|431)"),
        ("minimumAmountOfTraffic", "100"),
        ("additionalLabels", r#"route=~".*""#),
    ])
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Verifies an empty options map reports the first declared field.
#[test]
fn error_rate_empty_options_fail_on_first_field() {
    let err = evaluate(&OptionsMap::new()).unwrap_err();
    assert_eq!(err.to_string(), "error parsing options: 'metricName' is required");
}

/// Verifies an invalid service label value regex fails.
#[test]
fn error_rate_rejects_invalid_service_regex() {
    let mut opts = valid_options();
    opts.insert("serviceLabelValue", "([xyz");
    let err = evaluate(&opts).unwrap_err();
    assert!(err.to_string().starts_with("error parsing options: invalid regex for 'serviceLabelValue':"));
}

/// Verifies an invalid error label value regex fails.
#[test]
fn error_rate_rejects_invalid_error_regex() {
    let mut opts = valid_options();
    opts.insert("errorLabelValue", "([xyz");
    let err = evaluate(&opts).unwrap_err();
    assert!(err.to_string().starts_with("error parsing options: invalid regex for 'errorLabelValue':"));
}

/// Verifies the traffic threshold is required and numeric.
#[test]
fn error_rate_requires_numeric_traffic_threshold() {
    let mut opts = valid_options();
    opts.insert("minimumAmountOfTraffic", "");
    let err = evaluate(&opts).unwrap_err();
    assert_eq!(err.to_string(), "error parsing options: 'minimumAmountOfTraffic' option is required");

    let mut opts = valid_options();
    opts.insert("minimumAmountOfTraffic", "lots");
    let err = evaluate(&opts).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("error parsing options: not a valid minimumAmountOfTraffic, can't parse to float64:"));
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Verifies the full option set renders the traffic-gated query.
#[test]
fn error_rate_renders_gated_query() {
    let query = evaluate(&valid_options()).unwrap();
    assert_eq!(
        query,
        r#"
(
	(
		sum(
			rate(http_request_duration_seconds_count{ route=~".*", service=~"test", status_code=~"(5..|429|431)"}[{{ .window }}])
		)
		/
		(sum(
			rate(http_request_duration_seconds_count{ route=~".*", service=~"test"}[{{ .window }}])
		) > 0)
	) AND on(service) sum(rate(http_request_duration_seconds_count{ service=~"test"}[{{ .window }}])) > 100
) OR on() vector(0)
"#
    );
}

/// Verifies the threshold string is embedded exactly as supplied.
#[test]
fn error_rate_preserves_threshold_formatting() {
    let mut opts = valid_options();
    opts.insert("minimumAmountOfTraffic", "0.50");
    let query = evaluate(&opts).unwrap();
    assert!(query.contains("> 0.50\n"));
}
