//! Exchange loop configuration.

use super::ConfigError;

pub const DEFAULT_MAX_ITER: usize = 2000;
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;

/// Tunables for the exchange loop.
///
/// - `max_iter`     : cap on the number of solves
/// - `sample_count` : size of the dense grid the error curve is sampled on
/// - `tolerance`    : optional bound on node movement that ends the loop early
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemezConfig {
    max_iter: usize,
    sample_count: usize,
    tolerance: Option<f64>,
}

impl RemezConfig {
    pub fn new() -> Self {
        RemezConfig {
            max_iter: DEFAULT_MAX_ITER,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tolerance: None,
        }
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        self.max_iter = v;
        Ok(self)
    }

    pub fn set_sample_count(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 3 {
            return Err(ConfigError::TooFewSamples(v));
        }

        self.sample_count = v;
        Ok(self)
    }

    /// Stops the loop once no node moves by more than `v` between
    /// consecutive exchanges.
    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance(v));
        }

        self.tolerance = Some(v);
        Ok(self)
    }
}

impl Default for RemezConfig {
    fn default() -> Self {
        RemezConfig::new()
    }
}
