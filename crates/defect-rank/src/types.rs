//! Types for rank-sum test results

use std::fmt;

/// How the p-value of a rank-sum test is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankSumMethod {
    /// Exact for small tie-free samples, asymptotic otherwise
    #[default]
    Auto,
    /// Exact permutation distribution (ignores ties)
    Exact,
    /// Normal approximation with continuity and tie correction
    Asymptotic,
}

impl RankSumMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::Asymptotic => "asymptotic",
        }
    }
}

impl fmt::Display for RankSumMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of a one-sided rank-sum test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSumResult {
    /// U statistic of the treatment sample
    pub u_statistic: f64,
    /// One-sided p-value for "treatment is greater", in [0, 1]
    pub p_value: f64,
    /// Method that produced the p-value (never `Auto`)
    pub method: RankSumMethod,
    /// Sample sizes (treatment, control)
    pub sample_sizes: (usize, usize),
}

impl fmt::Display for RankSumResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U = {} (n = {}/{}), p = {:.4} [{}]",
            self.u_statistic, self.sample_sizes.0, self.sample_sizes.1, self.p_value, self.method
        )
    }
}
