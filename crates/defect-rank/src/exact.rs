//! Exact null distribution of the Mann-Whitney U statistic
//!
//! Without ties, the number of rank arrangements giving `U = k` for sample
//! sizes `m` and `n` is the coefficient of `q^k` in the Gaussian binomial
//! `[m + n choose m]_q = Π_{i=1..m} (1 - q^(n+i)) / (1 - q^i)`. Building the
//! product factor by factor costs `O(min(m, n) · m · n)`.
//!
//! Raw counts overflow `f64` once `C(m + n, m)` passes `f64::MAX`. Past
//! [`MAX_LN_COUNT`] the product is rescaled after every factor so that the
//! coefficients stay probabilities.

/// Largest `ln C(m + n, m)` for which raw counts are kept
pub const MAX_LN_COUNT: f64 = 600.0;

/// `ln C(m + n, m)`
pub fn ln_arrangements(m: usize, n: usize) -> f64 {
    let (m, n) = if m <= n { (m, n) } else { (n, m) };
    (1..=m).map(|i| ((n + i) as f64 / i as f64).ln()).sum()
}

fn gaussian_coefficients(m: usize, n: usize, normalize: bool) -> Vec<f64> {
    let (m, n) = if m <= n { (m, n) } else { (n, m) };

    let mut coefficients = vec![0.0; m * n + 1];
    coefficients[0] = 1.0;

    let mut degree = 0;
    for i in 1..=m {
        degree += n;
        // multiply by (1 - q^(n+i)), dropping terms above the final degree
        let shift = n + i;
        for k in (shift..=degree).rev() {
            coefficients[k] -= coefficients[k - shift];
        }
        // divide by (1 - q^i)
        for k in i..=degree {
            coefficients[k] += coefficients[k - i];
        }
        if normalize {
            // this factor multiplied the total by (n + i) / i
            let scale = i as f64 / shift as f64;
            for c in &mut coefficients[..=degree] {
                *c *= scale;
            }
        }
    }

    coefficients
}

/// Frequencies of every U value in `0..=m*n` for sample sizes `m` and `n`
///
/// Only finite while `ln_arrangements(m, n)` stays below [`MAX_LN_COUNT`].
pub fn u_frequencies(m: usize, n: usize) -> Vec<f64> {
    gaussian_coefficients(m, n, false)
}

/// Probabilities of every U value in `0..=m*n`; finite for any size
pub fn u_probabilities(m: usize, n: usize) -> Vec<f64> {
    gaussian_coefficients(m, n, true)
}

/// Upper tail `P(U >= u)` under the null hypothesis
pub fn upper_tail(u: f64, m: usize, n: usize) -> f64 {
    let distribution = if ln_arrangements(m, n) <= MAX_LN_COUNT {
        u_frequencies(m, n)
    } else {
        u_probabilities(m, n)
    };
    let total: f64 = distribution.iter().sum();

    let start = u.ceil().max(0.0) as usize;
    if start >= distribution.len() {
        return 0.0;
    }
    let tail: f64 = distribution[start..].iter().sum();
    (tail / total).clamp(0.0, 1.0)
}
