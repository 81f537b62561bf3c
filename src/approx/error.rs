//! Approximation errors.

use std::error::Error;
use std::fmt;

use itertools::Itertools;

/// A rejected run configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NonFiniteBound(f64),
    EmptyInterval { inf: f64, sup: f64 },
    TooFewSamples(usize),
    ZeroIterations,
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NonFiniteBound(bound) => {
                write!(f, "interval endpoint {bound} is not finite")
            }
            ConfigError::EmptyInterval { inf, sup } => {
                write!(f, "interval [{inf}, {sup}] is empty")
            }
            ConfigError::TooFewSamples(count) => {
                write!(f, "need at least 3 error samples, got {count}")
            }
            ConfigError::ZeroIterations => {
                write!(f, "iteration cap must be at least 1")
            }
            ConfigError::InvalidTolerance(tol) => {
                write!(f, "tolerance must be finite and positive, got {tol}")
            }
        }
    }
}

impl Error for ConfigError {}

/// A failure of a single numeric step, without run context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericError {
    /// The design matrix is singular or numerically degenerate.
    Singular,
    /// The target function produced a non-finite value.
    NonFinite { x: f64, fx: f64 },
}

impl NumericError {
    /// Attaches the iteration and node set at which the failure occurred.
    pub fn at(self, iteration: usize, nodes: &[f64]) -> RemezError {
        match self {
            NumericError::Singular => RemezError::Singular {
                iteration,
                nodes: nodes.to_vec(),
            },
            NumericError::NonFinite { x, fx } => {
                RemezError::NonFinite { iteration, x, fx }
            }
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericError::Singular => write!(f, "singular system"),
            NumericError::NonFinite { x, fx } => {
                write!(f, "function is not finite at x={x}, f(x)={fx}")
            }
        }
    }
}

impl Error for NumericError {}

/// An error aborting a Remez run.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RemezError {
    Config(ConfigError),
    Singular { iteration: usize, nodes: Vec<f64> },
    NonFinite { iteration: usize, x: f64, fx: f64 },
}

impl fmt::Display for RemezError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemezError::Config(err) => {
                write!(f, "invalid configuration: {err}")
            }
            RemezError::Singular { iteration, nodes } => write!(
                f,
                "singular system in iteration {iteration} with nodes [{}]",
                nodes.iter().join(", ")
            ),
            RemezError::NonFinite { iteration, x, fx } => write!(
                f,
                "function is not finite at x={x}, f(x)={fx} \
                 in iteration {iteration}"
            ),
        }
    }
}

impl Error for RemezError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RemezError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for RemezError {
    fn from(err: ConfigError) -> Self {
        RemezError::Config(err)
    }
}
