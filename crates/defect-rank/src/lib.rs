//! One-sided rank-sum testing
//!
//! This crate provides the Mann-Whitney U test with the alternative
//! hypothesis "treatment values tend to be greater than control values".
//! Ties are handled by average ranking. The p-value is exact for small
//! tie-free samples and uses the tie-corrected normal approximation with
//! continuity correction otherwise.
//!
//! # Example
//!
//! ```rust
//! use defect_rank::{MannWhitneyU, OneSidedTest, RankSumMethod};
//!
//! let defective = vec![4.0, 5.0, 6.0];
//! let clean = vec![1.0, 2.0, 3.0];
//!
//! let result = MannWhitneyU::new().test_greater(&defective, &clean).unwrap();
//! assert_eq!(result.method, RankSumMethod::Exact);
//! assert_eq!(result.p_value, 0.05);
//! ```

pub mod exact;
mod mann_whitney;
pub mod ranking;
mod traits;
mod types;

pub use mann_whitney::{MannWhitneyU, EXACT_SIZE_LIMIT};
pub use ranking::{average_ranks, Ranking};
pub use traits::OneSidedTest;
pub use types::{RankSumMethod, RankSumResult};

// Convenience constructor
pub fn mann_whitney_u() -> MannWhitneyU {
    MannWhitneyU::new()
}
