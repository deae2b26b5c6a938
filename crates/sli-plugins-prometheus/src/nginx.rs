// crates/sli-plugins-prometheus/src/nginx.rs
// ============================================================================
// Module: Nginx Ingress Plugins
// Description: Availability and latency plugins bound to nginx ingress
//              controller metrics.
// Purpose: Estimate SLIs for services exposed through the nginx ingress
//          controller.
// Dependencies: crate::catalog, sli-plugins-core
// ============================================================================

//! ## Overview
//! Variants of the HTTP SLIs bound to the fixed
//! `nginx_ingress_controller_request_duration_seconds` metrics and the
//! `exported_service` label the controller attaches. The error status set is
//! baked into the availability template.

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
// SECTION: Availability Plugin
// ============================================================================

/// Stable identifier of the availability plugin.
pub const AVAILABILITY_PLUGIN_ID: &str = "lokalise/nginx-http/availability";

/// Availability field schema in validation order.
const AVAILABILITY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required_regex("service_name_regex", "service_name"),
    FieldSpec::label_filter("filter", "filter", LabelSeparator::Comma),
];

/// Availability query template; the window token is pre-escaped.
const AVAILABILITY_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
(
	sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ {{ filter }}exported_service=~"{{ service_name }}", status=~"(5..|429|431)" }[{{ "{{ .window }}" }}])
	)
	/
	(sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ {{ filter }}exported_service=~"{{ service_name }}" }[{{ "{{ .window }}" }}])
	) > 0)
) OR on() vector(0)
"#,
);

/// Builds the nginx availability plugin definition.
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
pub const LATENCY_PLUGIN_ID: &str = "lokalise/nginx-http/latency";

/// Latency field schema in validation order.
const LATENCY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required_regex("service_name_regex", "service_name"),
    FieldSpec::required_number("bucket", "bucket"),
    FieldSpec::label_filter("filter", "filter", LabelSeparator::Comma),
];

/// Latency query template; the window token is pre-escaped.
const LATENCY_QUERY: QueryTemplate = QueryTemplate::new(
    r#"
1 - ((
	sum(
		rate(nginx_ingress_controller_request_duration_seconds_bucket{ {{ filter }}exported_service=~"{{ service_name }}", le="{{ bucket }}" }[{{ "{{ .window }}" }}])
	)
	/
	(sum(
		rate(nginx_ingress_controller_request_duration_seconds_count{ {{ filter }}exported_service=~"{{ service_name }}" }[{{ "{{ .window }}" }}])
	) > 0)
) OR on() vector(1))
"#,
);

/// Builds the nginx latency plugin definition.
#[must_use]
pub fn latency_plugin() -> PluginSpec {
    PluginSpec::new(
        LATENCY_PLUGIN_ID,
        SLI_PLUGIN_VERSION,
        LATENCY_FIELDS,
        QueryBody::Static(LATENCY_QUERY),
    )
}
