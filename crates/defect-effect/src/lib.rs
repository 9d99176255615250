//! Non-parametric effect size measurement
//!
//! Statistical significance says whether defect-prone artifacts tend to have
//! larger values; an effect size says by how much. This crate provides
//! Cliff's delta, an ordinal dominance measure that only relies on pairwise
//! comparisons and is therefore insensitive to outliers and skew.
//!
//! # Cliff's Delta
//!
//! ```rust
//! use defect_effect::{CliffDelta, NonParametricEffectSize};
//!
//! let defective = vec![3.0, 4.0, 5.0, 6.0, 7.0];
//! let clean = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let effect_size = CliffDelta::new().compute(&defective, &clean).unwrap();
//! assert!(effect_size.favors_treatment());
//! println!("Cliff's delta: {:.3}", effect_size.magnitude);
//! ```

mod cliff_delta;
mod traits;
mod types;

pub use cliff_delta::CliffDelta;
pub use traits::NonParametricEffectSize;
pub use types::{EffectSize, EffectSizeInterpretation};

// Convenience constructor
pub fn cliff_delta() -> CliffDelta {
    CliffDelta::new()
}
