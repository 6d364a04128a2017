//! Compensated summation for row reductions.

/// Neumaier-compensated running sum.
///
/// Tracks the low-order bits lost by each addition, so the error of the
/// final value does not grow with the number of terms the way a plain
/// left-to-right sum does. Only finite terms are compensated; once the
/// running sum is infinite or NaN it is returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    sum: f64,
    comp: f64,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.comp += (self.sum - t) + x;
        } else {
            self.comp += (x - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn value(&self) -> f64 {
        if self.sum.is_finite() {
            self.sum + self.comp
        } else {
            self.sum
        }
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

/// Compensated sum of `values`.
pub fn compensated_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut acc = CompensatedSum::new();
    acc.extend(values);
    acc.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_cancelled_terms() {
        // Plain summation returns 0 here.
        let values = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(values.iter().sum::<f64>(), 0.0);
        assert_eq!(compensated_sum(values), 2.0);
    }

    #[test]
    fn many_tenths() {
        let n = 1_000_000;
        let plain: f64 = std::iter::repeat_n(0.1, n).sum();
        let compensated = compensated_sum(std::iter::repeat_n(0.1, n));
        assert!((compensated - 100_000.0).abs() <= 100_000.0 * f64::EPSILON);
        assert!((plain - 100_000.0).abs() > (compensated - 100_000.0).abs());
    }

    #[test]
    fn non_finite_terms_propagate() {
        assert_eq!(compensated_sum([1.0, f64::INFINITY]), f64::INFINITY);
        assert!(compensated_sum([1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);
    }
}
