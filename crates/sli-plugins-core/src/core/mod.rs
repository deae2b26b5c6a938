// crates/sli-plugins-core/src/core/mod.rs
// ============================================================================
// Module: SLI Plugins Core Data Model
// Description: Core data model for SLI plugin evaluation.
// Purpose: Group identifiers, options, field schemas, and query templates.
// Dependencies: crate::core::{identifiers, options, schema, template}
// ============================================================================

//! ## Overview
//! The core data model covers everything a plugin definition needs: opaque
//! plugin identity, the caller-supplied options map, the declarative field
//! schema with its validator, and the query template renderer.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod identifiers;
pub mod options;
pub mod schema;
pub mod template;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::PluginId;
pub use identifiers::PluginVersion;
pub use options::LabelSet;
pub use options::OptionsMap;
pub use options::SloMetadata;
pub use schema::FieldKind;
pub use schema::FieldSpec;
pub use schema::LabelSeparator;
pub use schema::SubstitutionRecord;
pub use schema::ValidationError;
pub use schema::build_record;
pub use template::QueryTemplate;
pub use template::RenderError;
pub use template::WINDOW_PLACEHOLDER;
