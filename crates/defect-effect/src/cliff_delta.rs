//! Cliff's delta non-parametric effect size
//!
//! Cliff's delta estimates how often a value from one group exceeds a value
//! from the other group, minus how often the reverse happens.

use crate::{EffectSize, NonParametricEffectSize};
use defect_core::{Error, Result};

/// Cliff's delta effect size estimator
///
/// Cliff's delta (δ) is calculated as:
/// δ = (number of pairs where X > Y - number of pairs where X < Y) / (n₁ × n₂)
///
/// where X comes from the treatment group and Y from the control group.
/// Ties count for neither side.
///
/// The result ranges from -1 to +1:
/// - δ = +1: every treatment observation is larger than every control one
/// - δ = -1: every control observation is larger than every treatment one
/// - δ = 0: no dominance either way
#[derive(Debug, Clone, Copy, Default)]
pub struct CliffDelta;

impl CliffDelta {
    /// Create a new Cliff's delta estimator
    pub fn new() -> Self {
        Self
    }
}

fn check_inputs(treatment: &[f64], control: &[f64]) -> Result<()> {
    if treatment.is_empty() {
        return Err(Error::empty_input("cliff's delta (treatment sample)"));
    }
    if control.is_empty() {
        return Err(Error::empty_input("cliff's delta (control sample)"));
    }
    if treatment.iter().chain(control).any(|v| v.is_nan()) {
        return Err(Error::non_finite("cliff's delta input"));
    }
    Ok(())
}

fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Count pairs with `x > y` and pairs with `x < y` for sorted inputs
fn dominance_counts(sorted_treatment: &[f64], sorted_control: &[f64]) -> (u64, u64) {
    let mut greater = 0u64;
    let mut less = 0u64;

    // control values strictly below / at-or-below the current treatment value
    let mut below = 0usize;
    let mut at_or_below = 0usize;
    for &x in sorted_treatment {
        while below < sorted_control.len() && sorted_control[below] < x {
            below += 1;
        }
        at_or_below = at_or_below.max(below);
        while at_or_below < sorted_control.len() && sorted_control[at_or_below] <= x {
            at_or_below += 1;
        }
        greater += below as u64;
        less += (sorted_control.len() - at_or_below) as u64;
    }

    (greater, less)
}

impl NonParametricEffectSize for CliffDelta {
    fn compute(&self, treatment: &[f64], control: &[f64]) -> Result<EffectSize> {
        check_inputs(treatment, control)?;

        let mut sorted_treatment = treatment.to_vec();
        let mut sorted_control = control.to_vec();
        sorted_treatment.sort_by(f64::total_cmp);
        sorted_control.sort_by(f64::total_cmp);

        self.compute_sorted(&sorted_treatment, &sorted_control)
    }

    fn compute_sorted(
        &self,
        sorted_treatment: &[f64],
        sorted_control: &[f64],
    ) -> Result<EffectSize> {
        check_inputs(sorted_treatment, sorted_control)?;
        debug_assert!(
            is_ascending(sorted_treatment) && is_ascending(sorted_control),
            "compute_sorted needs samples sorted ascending"
        );

        let n1 = sorted_treatment.len();
        let n2 = sorted_control.len();
        let total_pairs = n1 as f64 * n2 as f64;

        let (greater, less) = dominance_counts(sorted_treatment, sorted_control);
        let delta = (greater as f64 - less as f64) / total_pairs;

        Ok(EffectSize::new(delta, (n1, n2)))
    }
}
