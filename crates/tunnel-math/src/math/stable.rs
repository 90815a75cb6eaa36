//! Numerically stable summation and averaging.
//!
//! Aggregates over pitch groups must not depend on the order the records
//! arrive in. Plain left-to-right float addition does, so the helpers here
//! sort their inputs before a compensated (Neumaier) sum.

/// Compensated sum of `values` in the order given.
pub fn neumaier_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut comp = 0.0_f64;
    for &v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            comp += (sum - t) + v;
        } else {
            comp += (v - t) + sum;
        }
        sum = t;
    }
    sum + comp
}

/// Order-independent sum: identical output for any permutation of `values`.
pub fn ordered_sum(values: &[f64]) -> f64 {
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    neumaier_sum(&sorted)
}

/// Order-independent arithmetic mean.
///
/// Returns NaN for empty input.
pub fn stable_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    ordered_sum(values) / values.len() as f64
}

/// Collects samples and reports their order-independent mean.
#[derive(Debug, Clone, Default)]
pub struct MeanAccumulator {
    samples: Vec<f64>,
}

impl MeanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MeanAccumulator {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.samples.push(value);
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean(&self) -> f64 {
        stable_mean(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn neumaier_recovers_small_terms() {
        let v = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(neumaier_sum(&v), 2.0);
    }

    #[test]
    fn ordered_sum_permutation_invariant() {
        let a = [0.1, 0.2, 0.3, 1e-9, -0.05];
        let b = [-0.05, 0.3, 1e-9, 0.1, 0.2];
        assert_eq!(ordered_sum(&a).to_bits(), ordered_sum(&b).to_bits());
    }

    #[test]
    fn stable_mean_basic() {
        assert!(approx_eq(stable_mean(&[1.0, 2.0, 3.0, 4.0]), 2.5, 1e-15));
    }

    #[test]
    fn stable_mean_empty_is_nan() {
        assert!(stable_mean(&[]).is_nan());
    }

    #[test]
    fn stable_mean_nan_propagates() {
        assert!(stable_mean(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn accumulator_tracks_count() {
        let mut acc = MeanAccumulator::with_capacity(3);
        assert!(acc.is_empty());
        acc.push(6.0);
        acc.push(6.2);
        acc.push(5.8);
        assert_eq!(acc.count(), 3);
        assert!(approx_eq(acc.mean(), 6.0, 1e-12));
    }
}
