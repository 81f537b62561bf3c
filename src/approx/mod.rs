//! Minimax polynomial approximation.

pub mod config;
pub mod error;
pub mod error_curve;
pub mod nodes;
pub mod peaks;
pub mod polynomial;
pub mod remez;
pub mod report;
pub mod solver;

pub use config::RemezConfig;
pub use error::{ConfigError, NumericError, RemezError};
pub use error_curve::ErrorCurve;
pub use nodes::{chebyshev_nodes, NodeSet};
pub use peaks::find_peaks;
pub use polynomial::Polynomial;
pub use remez::{exchange, remez, run, Exchange};
pub use report::{Approximation, Termination};
pub use solver::find_polynomial;
