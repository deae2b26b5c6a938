// crates/sli-plugins-core/src/lib.rs
// ============================================================================
// Module: SLI Plugins Core Library
// Description: Public API surface for the SLI plugins core.
// Purpose: Expose the options model, field schema validator, query template
//          renderer, and the plugin interface.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! SLI plugins core provides the shared mechanic behind every SLI plugin:
//! validating a loosely-typed options map against a declared field schema and
//! rendering a fixed PromQL template from the validated values. Evaluation is
//! pure and synchronous; the evaluation window stays an unresolved
//! placeholder for the host to substitute later.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::EvaluationError;
pub use interfaces::SliPlugin;
