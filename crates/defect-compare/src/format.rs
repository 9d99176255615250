//! Display rules for p-values and effect sizes
//!
//! P-values are truncated, never rounded up, so a displayed value is never
//! larger than the raw one. Significance is always decided on the raw value.

/// Threshold below which a p-value counts as significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Cell content used when a comparison could not be computed
pub const PLACEHOLDER: &str = "n/a";

/// Truncate `value` to `decimals` decimal places
fn truncate(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let mut units = (value * scale).trunc();
    // the product can round up to the next whole unit
    if units / scale > value {
        units -= 1.0;
    }
    units / scale
}

/// Render a p-value
///
/// - below 0.001: `"<0.001"`
/// - below 0.01: truncated to 3 decimals
/// - otherwise: truncated to 2 decimals
pub fn format_p_value(p: f64) -> String {
    if p < 0.001 {
        "<0.001".to_string()
    } else if p < 0.01 {
        format!("{:.3}", truncate(p, 3))
    } else {
        format!("{:.2}", truncate(p, 2))
    }
}

/// Render an effect size rounded to 2 decimals
pub fn format_effect_size(delta: f64) -> String {
    format!("{delta:.2}")
}

/// Whether a raw p-value is below [`SIGNIFICANCE_LEVEL`]
pub fn is_significant(p: f64) -> bool {
    p < SIGNIFICANCE_LEVEL
}

/// Display strings and significance flag of one report cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub p_display: String,
    pub delta_display: String,
    pub significant: bool,
}

impl FormattedResult {
    /// Format a raw p-value and effect size
    pub fn new(p_value: f64, delta: f64) -> Self {
        Self {
            p_display: format_p_value(p_value),
            delta_display: format_effect_size(delta),
            significant: is_significant(p_value),
        }
    }

    /// Cell for a comparison that could not be computed
    pub fn placeholder() -> Self {
        Self {
            p_display: PLACEHOLDER.to_string(),
            delta_display: PLACEHOLDER.to_string(),
            significant: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.p_display == PLACEHOLDER
    }
}
