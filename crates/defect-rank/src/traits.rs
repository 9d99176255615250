//! Core trait for one-sided two-sample tests

use crate::RankSumResult;
use defect_core::Result;

/// A one-sided test of "treatment values tend to be greater than control
/// values"
pub trait OneSidedTest: Send + Sync {
    /// Run the test; fails on empty samples
    fn test_greater(&self, treatment: &[f64], control: &[f64]) -> Result<RankSumResult>;
}
