//! Evaluation of one (property, dataset) cell

use crate::format::FormattedResult;
use defect_core::{Dataset, Error, PropertySpec, Result};
use defect_effect::{EffectSize, NonParametricEffectSize};
use defect_rank::{OneSidedTest, RankSumResult};
use tracing::{debug, warn};

/// What to do when a label group is empty for some cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyGroupPolicy {
    /// Fail the whole run with `InsufficientData`
    #[default]
    Abort,
    /// Emit an `n/a` cell that counts as not significant
    Placeholder,
}

/// Raw statistics behind a report cell
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub rank_sum: RankSumResult,
    pub effect: EffectSize,
}

impl TestResult {
    pub fn p_value(&self) -> f64 {
        self.rank_sum.p_value
    }

    pub fn delta(&self) -> f64 {
        self.effect.magnitude
    }
}

/// Outcome of evaluating one property on one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutcome {
    pub property: String,
    pub dataset: String,
    /// `None` for placeholder cells
    pub result: Option<TestResult>,
    pub formatted: FormattedResult,
}

/// Split, test, estimate and format a single cell
#[derive(Debug, Clone)]
pub struct PropertyEvaluator<S, E> {
    test: S,
    effect: E,
    empty_group_policy: EmptyGroupPolicy,
}

impl<S, E> PropertyEvaluator<S, E>
where
    S: OneSidedTest,
    E: NonParametricEffectSize,
{
    pub fn new(test: S, effect: E) -> Self {
        Self {
            test,
            effect,
            empty_group_policy: EmptyGroupPolicy::default(),
        }
    }

    pub fn with_empty_group_policy(mut self, policy: EmptyGroupPolicy) -> Self {
        self.empty_group_policy = policy;
        self
    }

    pub fn evaluate(&self, property: &PropertySpec, dataset: &Dataset) -> Result<CellOutcome> {
        let groups = dataset.split_groups(&property.key)?;

        if groups.has_empty_group() {
            let (label, actual) = if groups.defective.is_empty() {
                (defect_core::DEFECTIVE, groups.defective.len())
            } else {
                (defect_core::CLEAN, groups.clean.len())
            };
            let context = format!(
                "property '{}' in dataset '{}' ({}={label})",
                property.key,
                dataset.name(),
                defect_core::DEFECT_STATUS_COLUMN
            );

            return match self.empty_group_policy {
                EmptyGroupPolicy::Abort => Err(Error::InsufficientData {
                    context,
                    expected: 1,
                    actual,
                }),
                EmptyGroupPolicy::Placeholder => {
                    warn!("empty sample group for {context}, emitting placeholder cell");
                    Ok(CellOutcome {
                        property: property.key.clone(),
                        dataset: dataset.name().to_string(),
                        result: None,
                        formatted: FormattedResult::placeholder(),
                    })
                }
            };
        }

        let rank_sum = self.test.test_greater(&groups.defective, &groups.clean)?;
        let effect = self.effect.compute(&groups.defective, &groups.clean)?;
        let formatted = FormattedResult::new(rank_sum.p_value, effect.magnitude);

        debug!(
            property = %property.key,
            dataset = dataset.name(),
            u = rank_sum.u_statistic,
            p_value = rank_sum.p_value,
            method = %rank_sum.method,
            delta = effect.magnitude,
            magnitude = %effect.interpretation,
            n_defective = groups.defective.len(),
            n_clean = groups.clean.len(),
            significant = formatted.significant,
            "evaluated cell"
        );

        Ok(CellOutcome {
            property: property.key.clone(),
            dataset: dataset.name().to_string(),
            result: Some(TestResult { rank_sum, effect }),
            formatted,
        })
    }
}
