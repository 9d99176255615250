//! Cross-dataset significance aggregation
//!
//! A property is emphasized in the report when its test reached
//! significance on every dataset. The decision is a fold over the cells of
//! one property in dataset order.

use crate::format::FormattedResult;
use defect_core::{Error, Result};

/// Fold state: logical AND over per-dataset significance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignificanceAggregator {
    all_significant: bool,
    observed: usize,
}

impl SignificanceAggregator {
    pub fn new() -> Self {
        Self {
            all_significant: true,
            observed: 0,
        }
    }

    /// Fold in one dataset's significance flag
    #[must_use]
    pub fn observe(self, significant: bool) -> Self {
        Self {
            all_significant: self.all_significant && significant,
            observed: self.observed + 1,
        }
    }

    /// Final emphasis decision; folding no dataset at all is a
    /// configuration error
    pub fn finish(self) -> Result<bool> {
        if self.observed == 0 {
            return Err(Error::Configuration(
                "cannot aggregate significance over zero datasets".to_string(),
            ));
        }
        Ok(self.all_significant)
    }
}

impl Default for SignificanceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether every cell is significant
pub fn all_significant<'a>(cells: impl IntoIterator<Item = &'a FormattedResult>) -> Result<bool> {
    cells
        .into_iter()
        .fold(SignificanceAggregator::new(), |agg, cell| {
            agg.observe(cell.significant)
        })
        .finish()
}
