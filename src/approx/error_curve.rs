//! Dense sampling of approximation error.

use super::{find_peaks, NumericError, Polynomial};
use crate::utils::Interval;

/// The magnitude of `p(x) - f(x)` sampled on an evenly spaced grid.
pub struct ErrorCurve {
    xs: Vec<f64>,
    magnitudes: Vec<f64>,
}

impl ErrorCurve {
    /// Samples the error of `polynomial` against `f` at `count` evenly spaced
    /// points spanning the interval, endpoints included.
    pub fn sample<F>(
        polynomial: &Polynomial,
        f: F,
        interval: &Interval,
        count: usize,
    ) -> Result<ErrorCurve, NumericError>
    where
        F: Fn(f64) -> f64,
    {
        let xs: Vec<f64> = interval.linspace(count).collect();

        let magnitudes = xs
            .iter()
            .map(|&x| {
                let fx = f(x);

                if fx.is_finite() {
                    Ok((polynomial.eval(x) - fx).abs())
                } else {
                    Err(NumericError::NonFinite { x, fx })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(ErrorCurve { xs, magnitudes })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Locations of the interior local maxima of the error magnitude.
    pub fn extrema(&self) -> Vec<f64> {
        find_peaks(&self.magnitudes)
            .into_iter()
            .map(|i| self.xs[i])
            .collect()
    }

    /// Largest sampled error magnitude.
    pub fn max(&self) -> f64 {
        self.magnitudes.iter().copied().fold(0.0, f64::max)
    }
}
