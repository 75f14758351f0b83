//! Feature change-frequency aggregation
//!
//! Counts, per model feature, how many generated counterfactuals
//! altered that feature across every report entry. Counterfactuals
//! with a missing or malformed diff contribute nothing.

use crate::error::Result;
use crate::report::ExplanationResult;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-feature change counts for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFrequency {
    /// Change count per feature, in schema order
    pub counts: Array1<f64>,
    /// Feature names, parallel to `counts`
    pub feature_names: Vec<String>,
}

impl FeatureFrequency {
    /// Number of features
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the model declares no features
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded changes across all features
    pub fn total_changes(&self) -> f64 {
        self.counts.sum()
    }

    /// Feature indices ordered by descending count.
    ///
    /// The sort is stable: features with equal counts keep their
    /// schema-declared relative order.
    pub fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.counts.len()).collect();
        order.sort_by(|&a, &b| {
            self.counts[b]
                .partial_cmp(&self.counts[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    /// (name, count) pairs ordered by descending count
    pub fn sorted(&self) -> Vec<(String, f64)> {
        self.sorted_order()
            .into_iter()
            .map(|idx| (self.feature_names[idx].clone(), self.counts[idx]))
            .collect()
    }

    /// The k most frequently changed features
    pub fn top_k(&self, k: usize) -> Vec<(String, f64)> {
        self.sorted().into_iter().take(k).collect()
    }
}

/// Count how often each feature was changed by the counterfactuals
/// generated for `model_id`.
///
/// Fails with [`crate::FairsightError::ModelNotFound`] when the id is
/// not in the report; a counterfactual with a missing or malformed diff
/// is counted as changing nothing.
pub fn compute_feature_frequency(
    model_id: &str,
    result: &ExplanationResult,
) -> Result<FeatureFrequency> {
    let info = result.model(model_id)?;
    let feature_names = info.model_schema.feature_names();
    let num_features = feature_names.len();

    let mut counts = Array1::<f64>::zeros(num_features);
    let mut num_counterfactuals = 0usize;
    for counterfactual in info.counterfactuals() {
        num_counterfactuals += 1;
        for idx in counterfactual.changed_indices(num_features) {
            counts[idx] += 1.0;
        }
    }

    debug!(
        "Feature frequency for model {}: {} counterfactuals, {} changes over {} features",
        model_id,
        num_counterfactuals,
        counts.sum(),
        num_features
    );

    Ok(FeatureFrequency {
        counts,
        feature_names,
    })
}
