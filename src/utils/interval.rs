//! Closed real intervals.

use std::fmt;

use crate::approx::ConfigError;

/// A nonempty closed interval with finite endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub inf: f64,
    pub sup: f64,
}

impl Interval {
    /// Constructs the interval `[inf, sup]`, rejecting non-finite endpoints
    /// and empty or degenerate intervals.
    pub fn new(inf: f64, sup: f64) -> Result<Interval, ConfigError> {
        if !inf.is_finite() {
            return Err(ConfigError::NonFiniteBound(inf));
        }

        if !sup.is_finite() {
            return Err(ConfigError::NonFiniteBound(sup));
        }

        if inf >= sup {
            return Err(ConfigError::EmptyInterval { inf, sup });
        }

        Ok(Interval { inf, sup })
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.inf + self.sup)
    }

    pub fn radius(&self) -> f64 {
        0.5 * (self.sup - self.inf)
    }

    pub fn width(&self) -> f64 {
        self.sup - self.inf
    }

    /// Returns `count` evenly spaced points spanning the interval, both
    /// endpoints included.
    ///
    /// The last point is exactly `sup` regardless of rounding in the step.
    ///
    /// # Examples
    ///
    /// ```
    /// # use remez_nums::utils::Interval;
    /// #
    /// let interval = Interval::new(0.0, 1.0).unwrap();
    /// let xs: Vec<f64> = interval.linspace(5).collect();
    ///
    /// assert_eq!(xs, [0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let step = if count > 1 {
            self.width() / (count - 1) as f64
        } else {
            0.0
        };

        (0..count).map(move |i| {
            if i + 1 == count && count > 1 {
                self.sup
            } else {
                self.inf + i as f64 * step
            }
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.inf, self.sup)
    }
}
