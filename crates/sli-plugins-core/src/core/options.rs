// crates/sli-plugins-core/src/core/options.rs
// ============================================================================
// Module: SLI Plugin Options Model
// Description: Caller-supplied inputs for one plugin evaluation.
// Purpose: Provide the options map plus reserved metadata and label inputs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The options map carries the per-SLI configuration the host reads from its
//! SLO definitions, keyed by option name with raw string values. It is
//! immutable for the duration of one evaluation. Metadata and label maps are
//! part of the plugin contract but reserved; current plugins do not read
//! them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Reserved Inputs
// ============================================================================

/// SLO metadata supplied by the host. Reserved for future plugin use.
pub type SloMetadata = BTreeMap<String, String>;

/// SLO labels supplied by the host. Reserved for future plugin use.
pub type LabelSet = BTreeMap<String, String>;

// ============================================================================
// SECTION: Options Map
// ============================================================================

/// Raw plugin options keyed by option name.
///
/// # Invariants
/// - Keys are unique; values are the caller's raw strings, untouched until a
///   [`crate::core::schema::FieldSpec`] extracts them.
/// - Never mutated during an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsMap(BTreeMap<String, String>);

impl OptionsMap {
    /// Creates an empty options map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts an option, returning the previous value when present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the raw value for an option name, when present.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true when no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for OptionsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for OptionsMap {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self(value)
    }
}
