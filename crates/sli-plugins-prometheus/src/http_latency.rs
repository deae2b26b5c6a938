// crates/sli-plugins-prometheus/src/http_latency.rs
// ============================================================================
// Module: HTTP Latency Plugin
// Description: Share of requests above an upper histogram bucket limit.
// Purpose: Estimate latency SLIs from generic HTTP histogram metrics.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Computes `1 -` the ratio of requests observed at or below the configured
//! histogram bucket to all requests, so the result is the fraction of slow
//! requests. Zero traffic yields the fallback `vector(1)` inside the
//! inverted expression, which evaluates to a good (zero) SLI.

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
// SECTION: Plugin Definition
// ============================================================================

/// Stable plugin identifier.
pub const PLUGIN_ID: &str = "lokalise/http-latency";

/// Field schema in validation order.
const FIELDS: &[FieldSpec] = &[
    FieldSpec::required_text("metricName", "metric_name"),
    FieldSpec::required_text("serviceLabelName", "service_label_name"),
    FieldSpec::required_regex("serviceLabelValue", "service_label_value"),
    FieldSpec::required_number("upperLimitBucket", "upper_limit_bucket"),
    FieldSpec::label_filter("additionalLabels", "additional_labels", LabelSeparator::CommaSpace),
];

/// Query template; the window token is pre-escaped for the host.
const QUERY: QueryTemplate = QueryTemplate::new(
    r#"
	1 - ((
	sum(
		rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", le="{{ upper_limit_bucket }}" }[{{ "{{ .window }}" }}])
	)
	/
	(sum(
		rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}" }[{{ "{{ .window }}" }}])
	) > 0)
) OR on() vector(1))
"#,
);

/// Builds the http-latency plugin definition.
#[must_use]
pub fn plugin() -> PluginSpec {
    PluginSpec::new(PLUGIN_ID, SLI_PLUGIN_VERSION, FIELDS, QueryBody::Static(QUERY))
}
