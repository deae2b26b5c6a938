// crates/sli-plugins-core/src/interfaces/mod.rs
// ============================================================================
// Module: SLI Plugin Interface
// Description: The contract surface between the SLO host and plugins.
// Purpose: Define plugin evaluation and its error taxonomy.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The plugin interface is what the SLO-generation host consumes: a plugin
//! exposes stable identity and synthesizes a query string from the host's
//! metadata, labels, and options. Evaluation is synchronous, side-effect
//! free, and deterministic; every failure is a normal return value, never a
//! panic, and nothing is logged here (logging is a host concern).

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::PluginId;
use crate::core::identifiers::PluginVersion;
use crate::core::options::LabelSet;
use crate::core::options::OptionsMap;
use crate::core::options::SloMetadata;
use crate::core::schema::ValidationError;
use crate::core::template::RenderError;

// ============================================================================
// SECTION: Evaluation Errors
// ============================================================================

/// Plugin evaluation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The options map failed the plugin's field schema.
    #[error("error parsing options: {0}")]
    InvalidOptions(#[from] ValidationError),

    /// The template could not be rendered from the validated record.
    #[error("could not render query template: {0}")]
    Render(#[from] RenderError),
}

// ============================================================================
// SECTION: SLI Plugin
// ============================================================================

/// An SLI plugin: identity plus pure query synthesis.
///
/// # Invariants
/// - `evaluate` reads only its arguments and produces exactly one of a
///   non-empty query string or an error, never partial output.
/// - The returned query contains the literal window token
///   [`crate::core::template::WINDOW_PLACEHOLDER`] for each windowed
///   sub-expression and no other unresolved template syntax.
pub trait SliPlugin {
    /// Returns the stable plugin identifier.
    fn id(&self) -> &PluginId;

    /// Returns the plugin contract version.
    fn version(&self) -> &PluginVersion;

    /// Synthesizes a parameterized query from the host-supplied inputs.
    ///
    /// Metadata and labels are reserved inputs; current plugins read only
    /// the options map.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] when options fail validation or the
    /// template cannot be rendered.
    fn evaluate(
        &self,
        meta: &SloMetadata,
        labels: &LabelSet,
        options: &OptionsMap,
    ) -> Result<String, EvaluationError>;
}
