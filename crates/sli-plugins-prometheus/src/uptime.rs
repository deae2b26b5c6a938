// crates/sli-plugins-prometheus/src/uptime.rs
// ============================================================================
// Module: Uptime Plugin
// Description: Fraction of samples reporting down over an evaluation window.
// Purpose: Estimate uptime from a gauge that reads zero when unhealthy.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Counts the samples where the health gauge reads zero against all samples
//! in the window, using subqueries; an empty numerator falls back to
//! `vector(0)` so a fully healthy series is a defined zero rather than
//! "no data". The window token appears once per subquery.

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
pub const PLUGIN_ID: &str = "lokalise/uptime";

/// Field schema in validation order.
const FIELDS: &[FieldSpec] = &[
    FieldSpec::required_text("metricName", "metric_name"),
    FieldSpec::required_text("ingressLabelName", "ingress_label_name"),
    FieldSpec::required_regex("ingressLabelValue", "ingress_label_value"),
    FieldSpec::label_filter("additionalLabels", "additional_labels", LabelSeparator::CommaSpace),
];

/// Query template; the window token is pre-escaped for the host.
const QUERY: QueryTemplate = QueryTemplate::new(
    r#"
sum(count_over_time(({{ metric_name }}{ {{ additional_labels }}{{ ingress_label_name }}=~"{{ ingress_label_value }}" } == 0)[{{ "{{ .window }}" }}:])) or vector(0)
/
sum(count_over_time(({{ metric_name }}{ {{ additional_labels }}{{ ingress_label_name }}=~"{{ ingress_label_value }}" })[{{ "{{ .window }}" }}:]))
"#,
);

/// Builds the uptime plugin definition.
#[must_use]
pub fn plugin() -> PluginSpec {
    PluginSpec::new(PLUGIN_ID, SLI_PLUGIN_VERSION, FIELDS, QueryBody::Static(QUERY))
}
