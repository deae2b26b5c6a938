// crates/sli-plugins-prometheus/src/catalog.rs
// ============================================================================
// Module: Declarative Plugin Specification
// Description: Generic plugin built from a field schema and query templates.
// Purpose: Reduce every catalog plugin to declarative data.
// Dependencies: sli-plugins-core
// ============================================================================

//! ## Overview
//! A [`PluginSpec`] composes the core layers: validate the options map
//! against the declared field schema, then render the selected template from
//! the resulting record. Plugin definitions are pure data; the only
//! behavioral variation is [`QueryBody::TrafficGated`], which drops the
//! minimum-traffic guard clause from the output when the gate threshold is
//! the disabled value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sli_plugins_core::EvaluationError;
use sli_plugins_core::FieldSpec;
use sli_plugins_core::LabelSet;
use sli_plugins_core::OptionsMap;
use sli_plugins_core::PluginId;
use sli_plugins_core::PluginVersion;
use sli_plugins_core::QueryTemplate;
use sli_plugins_core::SliPlugin;
use sli_plugins_core::SloMetadata;
use sli_plugins_core::SubstitutionRecord;
use sli_plugins_core::build_record;

// ============================================================================
// SECTION: Query Body
// ============================================================================

/// Template selection strategy for a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryBody {
    /// A single fixed template.
    Static(QueryTemplate),

    /// Two templates switched on a validated gate value.
    ///
    /// When the record resolves `variable` to `disabled`, the ungated
    /// template renders and the guard clause is omitted entirely from the
    /// output.
    TrafficGated {
        /// Record variable holding the gate threshold.
        variable: &'static str,
        /// Threshold value that disables the gate.
        disabled: &'static str,
        /// Template carrying the `AND on() ... > threshold` guard.
        gated: QueryTemplate,
        /// Template without the guard clause.
        ungated: QueryTemplate,
    },
}

// ============================================================================
// SECTION: Plugin Specification
// ============================================================================

/// A catalog plugin defined as declarative data.
///
/// # Invariants
/// - Field schema and templates are process-wide constants; a spec is
///   immutable after construction and shareable across threads.
/// - The field schema's template variables cover every substitution point of
///   every template in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
    /// Stable plugin identifier.
    id: PluginId,
    /// Plugin contract version.
    version: PluginVersion,
    /// Field schema in validation order.
    fields: &'static [FieldSpec],
    /// Template selection strategy.
    body: QueryBody,
}

impl PluginSpec {
    /// Creates a plugin specification.
    #[must_use]
    pub fn new(
        id: impl Into<PluginId>,
        version: impl Into<PluginVersion>,
        fields: &'static [FieldSpec],
        body: QueryBody,
    ) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            fields,
            body,
        }
    }

    /// Returns the field schema in validation order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Selects the template to render for a validated record.
    fn template(&self, record: &SubstitutionRecord) -> QueryTemplate {
        match self.body {
            QueryBody::Static(template) => template,
            QueryBody::TrafficGated {
                variable,
                disabled,
                gated,
                ungated,
            } => {
                if record.get(variable) == Some(disabled) {
                    ungated
                } else {
                    gated
                }
            }
        }
    }
}

impl SliPlugin for PluginSpec {
    fn id(&self) -> &PluginId {
        &self.id
    }

    fn version(&self) -> &PluginVersion {
        &self.version
    }

    fn evaluate(
        &self,
        _meta: &SloMetadata,
        _labels: &LabelSet,
        options: &OptionsMap,
    ) -> Result<String, EvaluationError> {
        let record = build_record(self.fields, options)?;
        let query = self.template(&record).render(&record)?;
        Ok(query)
    }
}
