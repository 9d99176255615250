//! Types for effect size representation

use std::fmt;

/// A dominance effect size with its interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude, in [-1, 1]
    pub magnitude: f64,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (treatment, control)
    pub sample_sizes: (usize, usize),
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(magnitude: f64, sample_sizes: (usize, usize)) -> Self {
        Self {
            magnitude,
            interpretation: EffectSizeInterpretation::from_magnitude(magnitude),
            sample_sizes,
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }

    /// Check if the treatment group dominates the control group
    pub fn favors_treatment(&self) -> bool {
        self.magnitude > 0.0
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cliff's delta: {:.3} ({})", self.magnitude, self.interpretation)
    }
}

/// Interpretation of a Cliff's delta magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// |δ| < 0.147
    Negligible,
    /// |δ| < 0.33
    Small,
    /// |δ| < 0.474
    Medium,
    /// Everything above
    Large,
}

impl EffectSizeInterpretation {
    /// Classify a delta using the Romano et al. thresholds
    pub fn from_magnitude(magnitude: f64) -> Self {
        let abs_magnitude = magnitude.abs();
        if abs_magnitude < 0.147 {
            Self::Negligible
        } else if abs_magnitude < 0.33 {
            Self::Small
        } else if abs_magnitude < 0.474 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
