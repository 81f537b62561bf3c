//! Results of a Remez run.

use std::fmt;

use super::{NodeSet, Polynomial};

/// Why the exchange loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The error curve did not show the expected number of interior peaks.
    PeakCountMismatch { found: usize, expected: usize },
    /// The iteration cap was reached.
    IterationLimit,
    /// No node moved by more than the configured tolerance.
    NodesSettled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Termination::PeakCountMismatch { found, expected } => {
                write!(f, "found {found} error peaks, expected {expected}")
            }
            Termination::IterationLimit => write!(f, "iteration limit reached"),
            Termination::NodesSettled => write!(f, "nodes settled"),
        }
    }
}

/// Final result of a Remez run.
///
/// - `polynomial`   : the last fitted polynomial
/// - `nodes`        : the current node set, after the last exchange
/// - `fitted_nodes` : the node set `polynomial` was fitted on
/// - `error_term`   : the levelled error of the final fit
/// - `max_error`    : largest sampled `|p(x) - f(x)|` over the interval
/// - `iterations`   : number of fits performed
/// - `termination`  : why the loop stopped
#[derive(Clone, Debug)]
pub struct Approximation {
    pub polynomial: Polynomial,
    pub nodes: NodeSet,
    pub fitted_nodes: NodeSet,
    pub error_term: f64,
    pub max_error: f64,
    pub iterations: usize,
    pub termination: Termination,
}
