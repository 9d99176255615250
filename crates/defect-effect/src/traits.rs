//! Core traits for effect size estimation

use crate::types::EffectSize;
use defect_core::Result;

/// Trait for non-parametric effect size estimators
///
/// These estimators work on the raw samples and need no location or spread
/// estimate. Positive values mean the treatment sample dominates.
pub trait NonParametricEffectSize: Send + Sync {
    /// Compute effect size directly from the data
    fn compute(&self, treatment: &[f64], control: &[f64]) -> Result<EffectSize>;

    /// Compute from samples already sorted ascending
    ///
    /// Unsorted input gives a wrong result; debug builds panic on it.
    fn compute_sorted(&self, sorted_treatment: &[f64], sorted_control: &[f64])
        -> Result<EffectSize>;

    /// Check if the estimator is antisymmetric (effect(A,B) = -effect(B,A))
    fn is_antisymmetric(&self) -> bool {
        true
    }
}
