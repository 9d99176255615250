//! Average ranking of a pooled sample

use defect_core::{Error, Result};
use std::cmp::Ordering;

/// Ranks of a pooled sample together with its tie structure
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// 1-based ranks in input order; tied values share their average rank
    pub ranks: Vec<f64>,
    /// Size of every group of equal values, singletons included
    pub tie_groups: Vec<usize>,
}

impl Ranking {
    /// Whether any value occurs more than once
    pub fn has_ties(&self) -> bool {
        self.tie_groups.iter().any(|&t| t > 1)
    }

    /// Σ(t³ - t) over tie groups, the variance correction term
    pub fn tie_term(&self) -> f64 {
        self.tie_groups
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum()
    }
}

/// Rank `values` from smallest to largest, averaging ranks within ties
pub fn average_ranks(values: &[f64]) -> Result<Ranking> {
    if values.iter().any(|v| v.is_nan()) {
        return Err(Error::non_finite("ranked sample"));
    }

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut tie_groups = Vec::new();

    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // positions start..=end hold ranks start+1..=end+1
        let average = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = average;
        }
        tie_groups.push(end - start + 1);
        start = end + 1;
    }

    Ok(Ranking { ranks, tie_groups })
}
