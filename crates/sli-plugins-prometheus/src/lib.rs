// crates/sli-plugins-prometheus/src/lib.rs
// ============================================================================
// Module: Prometheus SLI Plugin Catalog
// Description: Public API surface for the Prometheus plugin catalog.
// Purpose: Expose the plugin definitions and the plugin registry.
// Dependencies: sli-plugins-core
// ============================================================================

//! ## Overview
//! The catalog ships the Prometheus SLI plugin definitions: each plugin is a
//! field schema plus a query template, composed through the generic
//! [`PluginSpec`]. The [`PluginRegistry`] routes host evaluations by plugin
//! identifier. Every rendered query keeps the evaluation window as the
//! literal `{{ .window }}` token for the host to resolve.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod deviation;
pub mod error_rate;
pub mod http;
pub mod http_latency;
pub mod nginx;
pub mod registry;
pub mod uptime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::PluginSpec;
pub use catalog::QueryBody;
pub use registry::PluginRegistry;
pub use registry::RegistryError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Plugin contract version shared by every catalog plugin.
pub const SLI_PLUGIN_VERSION: &str = "prometheus/v1";
