//! Per-feature diff values carried by a counterfactual

use serde::{Deserialize, Serialize};

/// Marker the upstream engine emits for a feature it left untouched
pub const UNCHANGED_MARKER: &str = "unchanged";

/// How a counterfactual's value differs from the original record.
///
/// Numeric features carry the delta from the original value; categorical
/// features carry a marker string (`"changed"`). Anything the engine
/// emits that is neither still loads as `Opaque` and counts as a change:
/// only `"unchanged"` and a zero delta mean the feature was untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffEntry {
    /// Numeric difference from the original value; 0 means unchanged
    Delta(f64),
    /// Marker string, `"unchanged"` or a categorical-change marker
    Marker(String),
    /// Unrecognized value, treated as a change
    Opaque(serde_json::Value),
}

impl DiffEntry {
    /// Whether this entry records a change to its feature
    pub fn is_change(&self) -> bool {
        match self {
            DiffEntry::Delta(delta) => *delta != 0.0,
            DiffEntry::Marker(marker) => marker != UNCHANGED_MARKER,
            DiffEntry::Opaque(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_marker_is_not_a_change() {
        assert!(!DiffEntry::Marker(UNCHANGED_MARKER.to_string()).is_change());
    }

    #[test]
    fn test_changed_marker_is_a_change() {
        assert!(DiffEntry::Marker("changed".to_string()).is_change());
    }

    #[test]
    fn test_zero_delta_is_not_a_change() {
        assert!(!DiffEntry::Delta(0.0).is_change());
    }

    #[test]
    fn test_nonzero_delta_is_a_change() {
        assert!(DiffEntry::Delta(-3.5).is_change());
        assert!(DiffEntry::Delta(0.001).is_change());
    }

    #[test]
    fn test_opaque_value_is_a_change() {
        assert!(DiffEntry::Opaque(serde_json::Value::Null).is_change());
    }

    #[test]
    fn test_untagged_deserialization() {
        let entries: Vec<DiffEntry> =
            serde_json::from_str(r#"["unchanged", 1, "changed", 0, -2.5]"#).unwrap();
        assert_eq!(entries[0], DiffEntry::Marker("unchanged".to_string()));
        assert_eq!(entries[1], DiffEntry::Delta(1.0));
        assert_eq!(entries[2], DiffEntry::Marker("changed".to_string()));
        assert_eq!(entries[3], DiffEntry::Delta(0.0));
        assert_eq!(entries[4], DiffEntry::Delta(-2.5));
    }
}
