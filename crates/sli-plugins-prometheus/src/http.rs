// crates/sli-plugins-prometheus/src/http.rs
// ============================================================================
// Module: Route-Aware HTTP Plugins
// Description: Availability and latency plugins with route/status defaults.
// Purpose: Estimate SLIs from standard HTTP duration histograms with
//          route-level granularity.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Route-aware variants of the HTTP availability and latency SLIs. Only the
//! service name regex is mandatory; route, status, and metric name fall back
//! to documented defaults, so omitting an option and supplying its default
//! explicitly render identical queries. Zero traffic yields `vector(0)`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sli_plugins_core::FieldSpec;
use sli_plugins_core::LabelSeparator;
use sli_plugins_core::QueryTemplate;

use crate::SLI_PLUGIN_VERSION;
use crate::catalog::PluginSpec;
use crate::catalog::QueryBody;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default route regex matching every route.
pub const DEFAULT_ROUTE_REGEX: &str = ".*";

/// Default status regex counting server errors and throttling as errors.
pub const DEFAULT_STATUS_REGEX: &str = "(5..|429|431)";

/// Default duration histogram metric name (without the type suffix).
pub const DEFAULT_METRIC_NAME: &str = "http_request_duration_seconds";

// ============================================================================
// SECTION: Availability Plugin
// ============================================================================

/// Stable identifier of the availability plugin.
pub const AVAILABILITY_PLUGIN_ID: &str = "lokalise/http/availability";

/// Availability field schema in validation order.
const AVAILABILITY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required_regex("service_name_regex", "service_name"),
    FieldSpec::optional_text("route_regex", "route", DEFAULT_ROUTE_REGEX),
    FieldSpec::optional_text("status_regex", "status", DEFAULT_STATUS_REGEX),
    FieldSpec::optional_text("metric_name", "metric_name", DEFAULT_METRIC_NAME),
    FieldSpec::label_filter("filter", "filter", LabelSeparator::Comma),
];

/// Availability query template; the window token is pre-escaped.
const AVAILABILITY_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	sum(
		rate({{ metric_name }}_count{ {{ filter }}service=~"{{ service_name }}", route=~"{{ route }}", status=~"{{ status }}" }[{{ "{{ .window }}" }}])
	)
	/
	(sum(
		rate({{ metric_name }}_count{ {{ filter }}service=~"{{ service_name }}", route=~"{{ route }}"}[{{ "{{ .window }}" }}])
	) > 0)
) OR on() vector(0)
"#,
);

/// Builds the route-aware availability plugin definition.
#[must_use]
pub fn availability_plugin() -> PluginSpec {
    PluginSpec::new(
        AVAILABILITY_PLUGIN_ID,
        SLI_PLUGIN_VERSION,
        AVAILABILITY_FIELDS,
        QueryBody::Static(AVAILABILITY_QUERY),
    )
}

// ============================================================================
// SECTION: Latency Plugin
// ============================================================================

/// Stable identifier of the latency plugin.
pub const LATENCY_PLUGIN_ID: &str = "lokalise/http/latency";

/// Latency field schema in validation order.
const LATENCY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required_regex("service_name_regex", "service_name"),
    FieldSpec::required_number("bucket", "bucket"),
    FieldSpec::optional_text("route_regex", "route", DEFAULT_ROUTE_REGEX),
    FieldSpec::optional_text("metric_name", "metric_name", DEFAULT_METRIC_NAME),
    FieldSpec::label_filter("filter", "filter", LabelSeparator::Comma),
];

/// Latency query template; the window token is pre-escaped.
const LATENCY_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	sum(
		rate({{ metric_name }}_bucket{ {{ filter }}service=~"{{ service_name }}", route=~"{{ route }}", le="{{ bucket }}" }[{{ "{{ .window }}" }}])
	)
	/
	(sum(
		rate({{ metric_name }}_count{ {{ filter }}service=~"{{ service_name }}", route=~"{{ route }}"}[{{ "{{ .window }}" }}])
	) > 0)
) OR on() vector(0)
"#,
);

/// Builds the route-aware latency plugin definition.
#[must_use]
pub fn latency_plugin() -> PluginSpec {
    PluginSpec::new(
        LATENCY_PLUGIN_ID,
        SLI_PLUGIN_VERSION,
        LATENCY_FIELDS,
        QueryBody::Static(LATENCY_QUERY),
    )
}
