//! Fairsight - explanation analytics and fairness visualization
//!
//! This crate consumes the result structure produced by an external
//! counterfactual/fairness scan engine and provides:
//! - Per-feature change-frequency aggregation over generated
//!   counterfactuals
//! - A per-model feature-frequency histogram
//! - A grouped fairness-burden chart with asymmetric error bars
//!
//! # Modules
//!
//! - [`report`] - typed explanation-report model and JSON loading
//! - [`frequency`] - feature change-frequency aggregation
//! - [`fairness`] - group fairness-burden table
//! - [`visualization`] - chart rendering onto caller-owned drawing areas
//!
//! Counterfactual generation, burden scoring, and confidence-interval
//! estimation all happen upstream; this crate only analyzes and draws
//! what the engine reports.

// Core error handling
pub mod error;

// Report data model
pub mod report;

// Analysis
pub mod fairness;
pub mod frequency;

// Rendering
pub mod visualization;

pub use error::{FairsightError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{FairsightError, Result};

    // Report model
    pub use crate::report::{
        Counterfactual, DiffEntry, ExplanationResult, FeatureSchema, ModelExplanationInfo,
        ModelSchema, ReportEntry,
    };

    // Frequency analysis
    pub use crate::frequency::{compute_feature_frequency, FeatureFrequency};

    // Fairness burden table
    pub use crate::fairness::{BurdenSeries, GroupBurdenTable};

    // Chart rendering
    pub use crate::visualization::{
        render_feature_histogram, render_feature_histogram_with_style, render_group_burden,
        render_group_burden_with_style, ChartStyle, DEFAULT_PALETTE,
    };
}
