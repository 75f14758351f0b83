//! Typed model of a counterfactual explanation report
//!
//! The upstream scan engine produces a report keyed on model id; each
//! model carries the generated counterfactuals and the feature schema
//! they are indexed against. Reports are usually saved to a JSON file
//! and re-read here for analysis.
//!
//! Wire names follow the upstream format: `explanation`, `explanations`,
//! `bestIndividuals`, `diff`, `model_schema`, `feature_schemas`, `name`.

mod diff;

pub use diff::{DiffEntry, UNCHANGED_MARKER};

use crate::error::{FairsightError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Top-level explanation report: one entry per scanned model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplanationResult {
    /// Per-model explanation data, keyed on model id
    #[serde(rename = "explanation")]
    explanation: HashMap<String, ModelExplanationInfo>,
}

impl ExplanationResult {
    /// Build a report from an already-assembled model mapping
    pub fn from_models(models: HashMap<String, ModelExplanationInfo>) -> Self {
        Self {
            explanation: models,
        }
    }

    /// Parse a report from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a report from any reader producing JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a report from a JSON file saved by the scan engine
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let result: Self = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded explanation report with {} models",
            result.explanation.len()
        );
        Ok(result)
    }

    /// Look up the explanation data for a model id.
    ///
    /// An unknown id is a hard failure, unlike the per-counterfactual
    /// fallbacks further down the extraction path.
    pub fn model(&self, model_id: &str) -> Result<&ModelExplanationInfo> {
        self.explanation
            .get(model_id)
            .ok_or_else(|| FairsightError::ModelNotFound(model_id.to_string()))
    }

    /// All model ids in the report, sorted
    pub fn model_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.explanation.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of models in the report
    pub fn len(&self) -> usize {
        self.explanation.len()
    }

    /// Whether the report contains no models
    pub fn is_empty(&self) -> bool {
        self.explanation.is_empty()
    }
}

/// Explanation data for a single model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelExplanationInfo {
    /// Report entries, each holding a batch of counterfactual candidates
    pub explanations: Vec<ReportEntry>,
    /// Feature schema the counterfactual diffs are indexed against
    pub model_schema: ModelSchema,
}

impl ModelExplanationInfo {
    /// All counterfactuals across every report entry, in report order
    pub fn counterfactuals(&self) -> impl Iterator<Item = &Counterfactual> + '_ {
        self.explanations
            .iter()
            .flat_map(|entry| entry.best_individuals.iter())
    }
}

/// Ordered feature declaration for a model; order defines feature index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSchema {
    pub feature_schemas: Vec<FeatureSchema>,
}

impl ModelSchema {
    /// Feature names in schema order
    pub fn feature_names(&self) -> Vec<String> {
        self.feature_schemas
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    /// Number of declared features
    pub fn len(&self) -> usize {
        self.feature_schemas.len()
    }

    /// Whether the schema declares no features
    pub fn is_empty(&self) -> bool {
        self.feature_schemas.is_empty()
    }
}

/// A single feature declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub name: String,
}

impl FeatureSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// One report entry: the best counterfactual candidates for a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "bestIndividuals")]
    pub best_individuals: Vec<Counterfactual>,
}

/// A generated counterfactual candidate.
///
/// `diff` aligns index-for-index with the model's feature schema. A
/// missing or malformed diff deserializes to `None` rather than failing
/// the whole report load; such a counterfactual contributes no changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterfactual {
    #[serde(
        default,
        deserialize_with = "lenient_diff",
        skip_serializing_if = "Option::is_none"
    )]
    pub diff: Option<Vec<DiffEntry>>,
}

impl Counterfactual {
    /// Indices of the features this counterfactual altered.
    ///
    /// Returns the empty set when the diff is missing; entries at or
    /// past `feature_count` are ignored.
    pub fn changed_indices(&self, feature_count: usize) -> Vec<usize> {
        match &self.diff {
            Some(diff) => diff
                .iter()
                .enumerate()
                .take(feature_count)
                .filter(|(_, entry)| entry.is_change())
                .map(|(idx, _)| idx)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Accept any JSON array as a diff; anything else becomes `None`
fn lenient_diff<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<DiffEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
