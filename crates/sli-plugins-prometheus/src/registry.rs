// crates/sli-plugins-prometheus/src/registry.rs
// ============================================================================
// Module: Plugin Registry
// Description: Registry routing SLI evaluations by plugin identifier.
// Purpose: Give the SLO host a single lookup and dispatch surface.
// Dependencies: sli-plugins-core
// ============================================================================

//! ## Overview
//! The registry resolves evaluations by plugin identifier. Identifiers are
//! unique within a registry; registering the built-in catalog wires up all
//! eight Prometheus plugins. The registry holds plugins behind trait objects
//! and is safe to share across threads once built.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use sli_plugins_core::EvaluationError;
use sli_plugins_core::LabelSet;
use sli_plugins_core::OptionsMap;
use sli_plugins_core::SliPlugin;
use sli_plugins_core::SloMetadata;
use thiserror::Error;

use crate::deviation;
use crate::error_rate;
use crate::http;
use crate::http_latency;
use crate::nginx;
use crate::uptime;

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Plugin registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A plugin identifier was registered twice.
    #[error("plugin already registered: {0}")]
    DuplicatePlugin(String),

    /// No plugin is registered under the requested identifier.
    #[error("plugin not registered: {0}")]
    UnknownPlugin(String),

    /// The dispatched plugin failed to evaluate.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

// ============================================================================
// SECTION: Plugin Registry
// ============================================================================

/// SLI plugin registry.
///
/// # Invariants
/// - Plugin identifiers are unique within the registry.
/// - Registered plugins are `Send + Sync` and stored behind trait objects.
#[derive(Default)]
pub struct PluginRegistry {
    /// Plugin implementations keyed by plugin identifier.
    plugins: BTreeMap<String, Box<dyn SliPlugin + Send + Sync>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// Creates a registry with the built-in catalog registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a catalog identifier collides, which
    /// indicates a defect in the catalog itself.
    pub fn with_builtin_plugins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(error_rate::plugin())?;
        registry.register(http_latency::plugin())?;
        registry.register(http::availability_plugin())?;
        registry.register(http::latency_plugin())?;
        registry.register(nginx::availability_plugin())?;
        registry.register(nginx::latency_plugin())?;
        registry.register(deviation::plugin())?;
        registry.register(uptime::plugin())?;
        Ok(registry)
    }

    /// Registers a plugin under its own identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the identifier is already registered.
    pub fn register(
        &mut self,
        plugin: impl SliPlugin + Send + Sync + 'static,
    ) -> Result<(), RegistryError> {
        let plugin_id = plugin.id().as_str().to_string();
        if self.plugins.contains_key(&plugin_id) {
            return Err(RegistryError::DuplicatePlugin(plugin_id));
        }
        self.plugins.insert(plugin_id, Box::new(plugin));
        Ok(())
    }

    /// Returns the plugin registered under an identifier, when present.
    #[must_use]
    pub fn get(&self, plugin_id: &str) -> Option<&(dyn SliPlugin + Send + Sync)> {
        self.plugins.get(plugin_id).map(Box::as_ref)
    }

    /// Returns the registered identifiers in deterministic order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    /// Evaluates the identified plugin against the host-supplied inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the identifier is unknown or the
    /// plugin's own evaluation fails.
    pub fn evaluate(
        &self,
        plugin_id: &str,
        meta: &SloMetadata,
        labels: &LabelSet,
        options: &OptionsMap,
    ) -> Result<String, RegistryError> {
        let Some(plugin) = self.plugins.get(plugin_id) else {
            return Err(RegistryError::UnknownPlugin(plugin_id.to_string()));
        };
        Ok(plugin.evaluate(meta, labels, options)?)
    }
}
