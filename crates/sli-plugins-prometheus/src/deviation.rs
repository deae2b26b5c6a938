// crates/sli-plugins-prometheus/src/deviation.rs
// ============================================================================
// Module: Request Processing Deviation Plugin
// Description: Deviation between requested and processed counters.
// Purpose: Estimate how far processing lags behind intake for a service.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Computes `(requested - processed) / requested` over a status-labeled
//! counter, optionally gated by a minimum requests-per-second threshold.
//! When the threshold is the literal `0` (the default), the guard clause is
//! omitted entirely from the rendered query rather than emitted as a no-op
//! comparison. Zero traffic yields the fallback `vector(0)`.

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
pub const PLUGIN_ID: &str = "lokalise/request-processing-deviation";

/// Threshold value that disables the traffic gate.
const GATE_DISABLED: &str = "0";

/// Field schema in validation order.
const FIELDS: &[FieldSpec] = &[
    FieldSpec::required_text("metricName", "metric_name"),
    FieldSpec::required_text("serviceLabelName", "service_label_name"),
    FieldSpec::required_regex("serviceLabelValue", "service_label_value"),
    FieldSpec::required_text("statusLabelName", "status_label_name"),
    FieldSpec::required_text("requestedStatus", "requested_status"),
    FieldSpec::required_text("processedStatus", "processed_status"),
    FieldSpec::optional_text("minimumRequestsPerSecond", "minimum_rps", GATE_DISABLED),
    FieldSpec::label_filter("additionalLabels", "additional_labels", LabelSeparator::CommaSpace),
];

/// Query template with the traffic guard; the window token is pre-escaped.
const GATED_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	(
		(
			sum(
				rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ requested_status }}"}[{{ "{{ .window }}" }}])
			)
			-
			sum(
				rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ processed_status }}"}[{{ "{{ .window }}" }}])
			)
		)
		/
		(sum(
			rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ requested_status }}"}[{{ "{{ .window }}" }}])
		) > 0)
	) AND on() sum(rate({{ metric_name }}{ {{ service_label_name }}=~"{{ service_label_value }}"}[{{ "{{ .window }}" }}])) > {{ minimum_rps }}
) OR on() vector(0)
"#,
);

/// Query template without the traffic guard.
const UNGATED_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	(
		(
			sum(
				rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ requested_status }}"}[{{ "{{ .window }}" }}])
			)
			-
			sum(
				rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ processed_status }}"}[{{ "{{ .window }}" }}])
			)
		)
		/
		(sum(
			rate({{ metric_name }}{ {{ additional_labels }}{{ service_label_name }}=~"{{ service_label_value }}", {{ status_label_name }}="{{ requested_status }}"}[{{ "{{ .window }}" }}])
		) > 0)
	)
) OR on() vector(0)
"#,
);

/// Builds the request-processing-deviation plugin definition.
#[must_use]
pub fn plugin() -> PluginSpec {
    PluginSpec::new(
        PLUGIN_ID,
        SLI_PLUGIN_VERSION,
        FIELDS,
        QueryBody::TrafficGated {
            variable: "minimum_rps",
            disabled: GATE_DISABLED,
            gated: GATED_QUERY,
            ungated: UNGATED_QUERY,
        },
    )
}
