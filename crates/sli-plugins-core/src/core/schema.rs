// crates/sli-plugins-core/src/core/schema.rs
// ============================================================================
// Module: SLI Plugin Field Schema
// Description: Declarative field schemas and options validation.
// Purpose: Turn a raw options map into a substitution record or a precise
//          user-facing validation error.
// Dependencies: regex, thiserror
// ============================================================================

//! ## Overview
//! Every plugin declares its expected options as an ordered sequence of
//! [`FieldSpec`] values. Validation walks the sequence in declared order and
//! fails fast on the first violating field; later fields are never
//! inspected. Regex fields are compile-checked only, to reject malformed
//! filter expressions before they would be embedded into a query undetected.
//! Numeric fields are parsed only for validation; the caller's original
//! string representation is what ends up in the rendered query.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use crate::core::options::OptionsMap;

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// User-facing option validation errors.
///
/// # Invariants
/// - Messages are a compatibility surface; hosts surface them verbatim to
///   SLO authors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text or regex option is missing or empty after trimming.
    #[error("'{field}' is required")]
    MissingOption {
        /// Option name as declared by the plugin.
        field: String,
    },

    /// A required numeric option is missing or empty.
    #[error("'{field}' option is required")]
    MissingNumericOption {
        /// Option name as declared by the plugin.
        field: String,
    },

    /// A regex option does not compile.
    #[error("invalid regex for '{field}': {cause}")]
    InvalidRegex {
        /// Option name as declared by the plugin.
        field: String,
        /// Rendered regex compiler error.
        cause: String,
    },

    /// A numeric option does not parse as a 64-bit float.
    #[error("not a valid {field}, can't parse to float64: {cause}")]
    NotNumeric {
        /// Option name as declared by the plugin.
        field: String,
        /// Rendered float parse error.
        cause: String,
    },
}

// ============================================================================
// SECTION: Field Specifications
// ============================================================================

/// Separator appended to a sanitized label filter fragment.
///
/// The separator matches the label-list syntax of the template the fragment
/// is inserted into, so caller-supplied filters compose with the fixed
/// selectors that follow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSeparator {
    /// A bare comma, for templates written as `{ {{ filter }}label=... }`.
    Comma,
    /// A comma and a space, for templates written with spaced label lists.
    CommaSpace,
}

impl LabelSeparator {
    /// Returns the separator's literal text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::CommaSpace => ", ",
        }
    }
}

/// Validation policy for one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whitespace-trimmed text that must be non-empty.
    RequiredText,
    /// Whitespace-trimmed text that must be non-empty and compile as a regex.
    RequiredRegex,
    /// Untrimmed text that must be non-empty and parse as a 64-bit float.
    RequiredNumber,
    /// Whitespace-trimmed text, replaced by a default when missing or empty.
    OptionalText {
        /// Value substituted when the option is missing or empty.
        default: &'static str,
    },
    /// Label filter fragment, sanitized and suffixed; never fails.
    LabelFilter {
        /// Separator appended when the sanitized fragment is non-empty.
        separator: LabelSeparator,
    },
}

/// One expected entry in the options map.
///
/// # Invariants
/// - `name` is the option key the caller supplies; `variable` is the
///   template substitution point the validated value resolves.
/// - FieldSpec sequences are plugin-definition constants, fixed for the
///   process lifetime and shared across concurrent evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Option key in the caller-supplied options map.
    pub name: &'static str,
    /// Template variable the validated value substitutes.
    pub variable: &'static str,
    /// Validation policy applied to the raw value.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declares a required free-text field.
    #[must_use]
    pub const fn required_text(name: &'static str, variable: &'static str) -> Self {
        Self {
            name,
            variable,
            kind: FieldKind::RequiredText,
        }
    }

    /// Declares a required regex field.
    #[must_use]
    pub const fn required_regex(name: &'static str, variable: &'static str) -> Self {
        Self {
            name,
            variable,
            kind: FieldKind::RequiredRegex,
        }
    }

    /// Declares a required numeric field.
    #[must_use]
    pub const fn required_number(name: &'static str, variable: &'static str) -> Self {
        Self {
            name,
            variable,
            kind: FieldKind::RequiredNumber,
        }
    }

    /// Declares an optional text field with a default.
    #[must_use]
    pub const fn optional_text(
        name: &'static str,
        variable: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            variable,
            kind: FieldKind::OptionalText {
                default,
            },
        }
    }

    /// Declares a sanitized label filter field.
    #[must_use]
    pub const fn label_filter(
        name: &'static str,
        variable: &'static str,
        separator: LabelSeparator,
    ) -> Self {
        Self {
            name,
            variable,
            kind: FieldKind::LabelFilter {
                separator,
            },
        }
    }
}

// ============================================================================
// SECTION: Substitution Record
// ============================================================================

/// Resolved template variables for one evaluation.
///
/// # Invariants
/// - Built strictly after every [`FieldSpec`] in the plugin's schema has
///   validated; discarded after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionRecord(BTreeMap<String, String>);

impl SubstitutionRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a template variable to its resolved value.
    pub fn set(&mut self, variable: impl Into<String>, value: impl Into<String>) {
        self.0.insert(variable.into(), value.into());
    }

    /// Returns the resolved value for a template variable, when present.
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(String::as_str)
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates the options map against a field schema in declared order.
///
/// Fails fast: the first violating field's error is returned and later
/// fields are not inspected.
///
/// # Errors
///
/// Returns [`ValidationError`] when a required field is missing, empty, or
/// fails its kind-specific syntactic check.
pub fn build_record(
    fields: &[FieldSpec],
    options: &OptionsMap,
) -> Result<SubstitutionRecord, ValidationError> {
    let mut record = SubstitutionRecord::new();
    for field in fields {
        let value = validate_field(field, options)?;
        record.set(field.variable, value);
    }
    Ok(record)
}

/// Applies one field's validation policy to the raw options map.
fn validate_field(field: &FieldSpec, options: &OptionsMap) -> Result<String, ValidationError> {
    let raw = options.raw(field.name).unwrap_or("");
    match field.kind {
        FieldKind::RequiredText => {
            let value = raw.trim();
            if value.is_empty() {
                return Err(ValidationError::MissingOption {
                    field: field.name.to_string(),
                });
            }
            Ok(value.to_string())
        }
        FieldKind::RequiredRegex => {
            let value = raw.trim();
            if value.is_empty() {
                return Err(ValidationError::MissingOption {
                    field: field.name.to_string(),
                });
            }
            if let Err(cause) = Regex::new(value) {
                return Err(ValidationError::InvalidRegex {
                    field: field.name.to_string(),
                    cause: cause.to_string(),
                });
            }
            Ok(value.to_string())
        }
        FieldKind::RequiredNumber => {
            if raw.is_empty() {
                return Err(ValidationError::MissingNumericOption {
                    field: field.name.to_string(),
                });
            }
            if let Err(cause) = raw.parse::<f64>() {
                return Err(ValidationError::NotNumeric {
                    field: field.name.to_string(),
                    cause: cause.to_string(),
                });
            }
            // The original string is embedded, not a reformatted number.
            Ok(raw.to_string())
        }
        FieldKind::OptionalText {
            default,
        } => {
            let value = raw.trim();
            if value.is_empty() {
                return Ok(default.to_string());
            }
            Ok(value.to_string())
        }
        FieldKind::LabelFilter {
            separator,
        } => Ok(sanitize_label_filter(raw, separator)),
    }
}

/// Strips selector braces and stray commas, then appends the separator.
///
/// Equivalent spellings normalize to one fragment: `k1="v",`, `{k1="v"}`,
/// and `k1="v"` all sanitize to the same text.
fn sanitize_label_filter(raw: &str, separator: LabelSeparator) -> String {
    let stripped = raw.trim_matches(|c| matches!(c, '{' | '}' | ','));
    if stripped.is_empty() {
        return String::new();
    }
    let mut fragment = String::with_capacity(stripped.len() + 2);
    fragment.push_str(stripped);
    fragment.push_str(separator.as_str());
    fragment
}
