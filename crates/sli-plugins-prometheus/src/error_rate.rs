// crates/sli-plugins-prometheus/src/error_rate.rs
// ============================================================================
// Module: HTTP Error Rate Plugin
// Description: Error-labeled request rate over total rate, traffic-gated.
// Purpose: Estimate availability from generic HTTP service metrics.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Computes the ratio of error-labeled requests to all requests for a
//! service, `AND`-gated by a minimum amount of traffic so low-traffic noise
//! does not burn error budget. A series with zero observed traffic yields
//! the fallback `vector(0)` (good) instead of "no data".

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
pub const PLUGIN_ID: &str = "lokalise/http-error-rate";

/// Field schema in validation order.
const FIELDS: &[FieldSpec] = &[
    FieldSpec::required_text("metricName", "metric_name"),
    FieldSpec::required_text("serviceLabelName", "service_label_name"),
    FieldSpec::required_regex("serviceLabelValue", "service_label_value"),
    FieldSpec::required_text("errorLabelName", "error_label_name"),
    FieldSpec::required_regex("errorLabelValue", "error_label_value"),
    FieldSpec::required_number("minimumAmountOfTraffic", "minimum_traffic"),
    FieldSpec::label_filter("additionalLabels", "additional_labels", LabelSeparator::CommaSpace),
];

/// Query template; the window token is pre-escaped for the host.
const QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	(
		sum(
			rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ error_label_name }}=~"{{ error_label_value }}"}[{{ "{{ .window }}" }}])
		)
		/
		(sum(
			rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}"}[{{ "{{ .window }}" }}])
		) > 0)
	) AND on({{ service_label_name }}) sum(rate({{ metric_name }}{ {{ service_label_name }}=~"{{ service_label_value }}"}[{{ "{{ .window }}" }}])) > {{ minimum_traffic }}
) OR on() vector(0)
"#,
);

/// Builds the http-error-rate plugin definition.
#[must_use]
pub fn plugin() -> PluginSpec {
    PluginSpec::new(PLUGIN_ID, SLI_PLUGIN_VERSION, FIELDS, QueryBody::Static(QUERY))
}
