//! One-sided Mann-Whitney U test
//!
//! The statistic of the treatment sample is `U1 = R1 - n1(n1 + 1)/2`, where
//! `R1` is its rank sum in the pooled sample under average ranking. The test
//! reports `P(U >= U1)` under the null hypothesis of identical distributions.

use crate::{
    exact::upper_tail, ranking::average_ranks, OneSidedTest, RankSumMethod, RankSumResult,
};
use defect_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::trace;

/// Samples at or below this size (on the smaller side) use the exact
/// distribution under [`RankSumMethod::Auto`] when there are no ties
pub const EXACT_SIZE_LIMIT: usize = 8;

/// Mann-Whitney U test with alternative "greater"
#[derive(Debug, Clone, Copy)]
pub struct MannWhitneyU {
    method: RankSumMethod,
    use_continuity_correction: bool,
}

impl MannWhitneyU {
    /// Create a test with automatic method selection and continuity correction
    pub fn new() -> Self {
        Self {
            method: RankSumMethod::Auto,
            use_continuity_correction: true,
        }
    }

    /// Force a p-value method
    pub fn with_method(mut self, method: RankSumMethod) -> Self {
        self.method = method;
        self
    }

    /// Disable the 0.5 continuity correction of the normal approximation
    pub fn without_continuity_correction(mut self) -> Self {
        self.use_continuity_correction = false;
        self
    }

    pub fn method(&self) -> RankSumMethod {
        self.method
    }

    fn asymptotic_p(&self, u1: f64, n1: usize, n2: usize, tie_term: f64) -> Result<f64> {
        let n1_f = n1 as f64;
        let n2_f = n2 as f64;
        let n = n1_f + n2_f;

        let mu = n1_f * n2_f / 2.0;
        let variance = if n > 1.0 {
            n1_f * n2_f / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)))
        } else {
            0.0
        };

        // every pooled value tied: no evidence either way
        if variance <= 0.0 {
            return Ok(1.0);
        }

        let mut numerator = u1 - mu;
        if self.use_continuity_correction {
            numerator -= 0.5;
        }
        let z = numerator / variance.sqrt();

        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            Error::Computation(format!("Failed to create normal distribution: {e}"))
        })?;
        // upper tail via the lower tail of -z keeps precision for large z
        Ok(normal.cdf(-z))
    }
}

impl Default for MannWhitneyU {
    fn default() -> Self {
        Self::new()
    }
}

impl OneSidedTest for MannWhitneyU {
    fn test_greater(&self, treatment: &[f64], control: &[f64]) -> Result<RankSumResult> {
        if treatment.is_empty() {
            return Err(Error::empty_input("rank-sum test (treatment sample)"));
        }
        if control.is_empty() {
            return Err(Error::empty_input("rank-sum test (control sample)"));
        }

        let n1 = treatment.len();
        let n2 = control.len();

        let pooled: Vec<f64> = treatment.iter().chain(control).copied().collect();
        let ranking = average_ranks(&pooled)?;

        let r1: f64 = ranking.ranks[..n1].iter().sum();
        let u1 = r1 - (n1 * (n1 + 1)) as f64 / 2.0;

        let method = match self.method {
            RankSumMethod::Auto => {
                if n1.min(n2) <= EXACT_SIZE_LIMIT && !ranking.has_ties() {
                    RankSumMethod::Exact
                } else {
                    RankSumMethod::Asymptotic
                }
            }
            fixed => fixed,
        };

        let p_value = match method {
            RankSumMethod::Exact => upper_tail(u1, n1, n2),
            _ => self.asymptotic_p(u1, n1, n2, ranking.tie_term())?,
        };
        if !p_value.is_finite() {
            return Err(Error::Computation(format!(
                "Non-finite p-value for sample sizes {n1} and {n2} ({method})"
            )));
        }
        let p_value = p_value.clamp(0.0, 1.0);

        trace!(u1, p_value, %method, n1, n2, "mann-whitney u");

        Ok(RankSumResult {
            u_statistic: u1,
            p_value,
            method,
            sample_sizes: (n1, n2),
        })
    }
}
