// crates/sli-plugins-core/src/core/template.rs
// ============================================================================
// Module: SLI Query Template Renderer
// Description: Substitution of validated values into fixed query templates.
// Purpose: Render plugin templates while passing the evaluation window token
//          through unresolved.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Templates are static strings with two token forms: `{{ variable }}`
//! substitutes the matching [`SubstitutionRecord`] value verbatim, and
//! `{{ "text" }}` emits `text` literally. The literal form exists for one
//! purpose: every template writes the evaluation window as
//! `{{ "{{ .window }}" }}` so rendering emits the unresolved
//! `{{ .window }}` token for the host to substitute in a later phase.
//!
//! Substitution is plain interpolation. Values are not escaped and are not
//! re-scanned for tokens, so record values cannot introduce new substitution
//! points.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::schema::SubstitutionRecord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// The window token the host resolves after rendering.
pub const WINDOW_PLACEHOLDER: &str = "{{ .window }}";

// ============================================================================
// SECTION: Render Errors
// ============================================================================

/// Template rendering failures.
///
/// # Invariants
/// - These indicate a defect in a plugin's own field/template pairing, not a
///   condition users can trigger through options alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A substitution point names a variable absent from the record.
    #[error("template references undeclared variable '{variable}'")]
    UnresolvedVariable {
        /// Variable name found in the template.
        variable: String,
    },

    /// A `{{` opener has no matching closer.
    #[error("unterminated substitution point in query template")]
    UnterminatedPlaceholder,
}

// ============================================================================
// SECTION: Query Template
// ============================================================================

/// A fixed query template owned by a plugin definition.
///
/// # Invariants
/// - Template sources are `'static` constants, never mutated, and safe to
///   share across concurrent evaluations.
/// - Substitution points are one-to-one with the record a plugin's field
///   schema produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    /// Template source text.
    source: &'static str,
}

impl QueryTemplate {
    /// Creates a template from its source text.
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
        }
    }

    /// Returns the template source text.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Renders the template against a substitution record.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a substitution point has no matching
    /// record entry or a placeholder is unterminated.
    pub fn render(&self, record: &SubstitutionRecord) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len() + 64);
        let mut rest = self.source;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let body = rest[open + 2..].trim_start_matches(' ');

            if let Some(quoted) = body.strip_prefix('"') {
                // Literal escape: the quoted text may itself contain `}}`,
                // so the closer is located after the closing quote.
                let Some(end_quote) = quoted.find('"') else {
                    return Err(RenderError::UnterminatedPlaceholder);
                };
                let after_quote = quoted[end_quote + 1..].trim_start_matches(' ');
                let Some(remainder) = after_quote.strip_prefix("}}") else {
                    return Err(RenderError::UnterminatedPlaceholder);
                };
                out.push_str(&quoted[..end_quote]);
                rest = remainder;
            } else {
                let Some(close) = body.find("}}") else {
                    return Err(RenderError::UnterminatedPlaceholder);
                };
                let variable = body[..close].trim();
                let Some(value) = record.get(variable) else {
                    return Err(RenderError::UnresolvedVariable {
                        variable: variable.to_string(),
                    });
                };
                out.push_str(value);
                rest = &body[close + 2..];
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}
