//! Minimax approximations by Remez exchange.

use itertools::Itertools;

use super::{
    Approximation, ErrorCurve, NodeSet, NumericError, Polynomial, RemezConfig,
    RemezError, Termination,
};
use crate::utils::Interval;

/// One step of the exchange map.
///
/// - `polynomial` : fit on the input node set
/// - `error_term` : levelled error of that fit
/// - `max_error`  : largest sampled error magnitude of that fit
/// - `extrema`    : interior peaks of the sampled error magnitude
#[derive(Clone, Debug)]
pub struct Exchange {
    pub polynomial: Polynomial,
    pub error_term: f64,
    pub max_error: f64,
    pub extrema: Vec<f64>,
}

impl Exchange {
    /// The node set proposed by this step: the extrema together with both
    /// interval endpoints.
    pub fn next_nodes(&self, interval: &Interval) -> NodeSet {
        NodeSet::from_extrema(interval, &self.extrema)
    }
}

/// Fits a levelled polynomial on `nodes`, samples its error over `interval`
/// and locates the interior peaks of the error magnitude.
pub fn exchange<F>(
    f: F,
    nodes: &NodeSet,
    interval: &Interval,
    sample_count: usize,
) -> Result<Exchange, NumericError>
where
    F: Fn(f64) -> f64,
{
    let (polynomial, error_term) = super::find_polynomial(nodes, &f)?;
    let curve = ErrorCurve::sample(&polynomial, &f, interval, sample_count)?;

    Ok(Exchange {
        max_error: curve.max(),
        extrema: curve.extrema(),
        polynomial,
        error_term,
    })
}

/// Computes a polynomial of the given degree approximating `f` over the
/// interval so as to minimize the maximum absolute error.
///
/// Starting from Chebyshev nodes, the loop alternates between fitting a
/// levelled polynomial and moving the nodes to the peaks of its error curve.
/// It stops when the error curve no longer shows exactly `degree` interior
/// peaks, when the iteration cap is reached, or, if a tolerance is
/// configured, when the nodes stop moving. The returned node set is the one
/// produced by the last exchange, unless the peak count was off, in which
/// case it is the set the final polynomial was fitted on. Only the peak count
/// is checked by
/// default, so the result is a fixed point of the exchange at best and is
/// not guaranteed to be globally optimal.
pub fn remez<F>(
    f: F,
    degree: usize,
    interval: &Interval,
    config: &RemezConfig,
) -> Result<Approximation, RemezError>
where
    F: Fn(f64) -> f64,
{
    let expected = degree;
    let mut nodes = NodeSet::chebyshev(interval, degree + 2);
    let mut iteration = 0;

    loop {
        iteration += 1;

        log::trace!(
            "iteration {iteration}: nodes [{}]",
            nodes.iter().format(", ")
        );

        let step = exchange(&f, &nodes, interval, config.sample_count())
            .map_err(|err| err.at(iteration, &nodes))?;

        log::debug!(
            "iteration {iteration}: levelled error {:e}, sampled error {:e}, \
             {} peaks",
            step.error_term,
            step.max_error,
            step.extrema.len(),
        );

        let found = step.extrema.len();
        let next = step.next_nodes(interval);

        let termination = if found != expected {
            if iteration == 1 {
                log::warn!(
                    "initial fit shows {found} error peaks instead of \
                     {expected}; no exchange performed"
                );
            }

            Some(Termination::PeakCountMismatch { found, expected })
        } else if iteration >= config.max_iter() {
            Some(Termination::IterationLimit)
        } else {
            config
                .tolerance()
                .filter(|&tol| nodes.max_shift(&next) <= tol)
                .map(|_| Termination::NodesSettled)
        };

        if let Some(termination) = termination {
            log::info!(
                "terminated after {iteration} iterations: {termination}"
            );

            // A mismatch discards the extrema; otherwise the exchange stands.
            let current = match termination {
                Termination::PeakCountMismatch { .. } => nodes.clone(),
                _ => next,
            };

            return Ok(Approximation {
                polynomial: step.polynomial,
                nodes: current,
                fitted_nodes: nodes,
                error_term: step.error_term,
                max_error: step.max_error,
                iterations: iteration,
                termination,
            });
        }

        nodes = next;
    }
}

/// Runs [`remez`] with the default configuration, returning the polynomial
/// and the current node set.
///
/// # Examples
///
/// ```
/// # use remez_nums::approx;
/// #
/// let (p, nodes) = approx::run(f64::exp, 3, -0.5, 0.5).unwrap();
///
/// assert_eq!(p.coefficients().len(), 4);
/// assert_eq!(nodes.len(), 5);
/// assert!((p.eval(0.25) - 0.25_f64.exp()).abs() < 1e-3);
/// ```
pub fn run<F>(
    f: F,
    degree: usize,
    interval_min: f64,
    interval_max: f64,
) -> Result<(Polynomial, NodeSet), RemezError>
where
    F: Fn(f64) -> f64,
{
    let interval = Interval::new(interval_min, interval_max)?;
    let approx = remez(f, degree, &interval, &RemezConfig::new())?;

    Ok((approx.polynomial, approx.nodes))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, LN_2};

    use super::*;
    use crate::approx::ConfigError;

    fn config(max_iter: usize) -> RemezConfig {
        RemezConfig::new().set_max_iter(max_iter).unwrap()
    }

    fn fine_grid_error<F>(p: &Polynomial, f: F, interval: &Interval) -> f64
    where
        F: Fn(f64) -> f64,
    {
        interval
            .linspace(10_001)
            .map(|x| (p.eval(x) - f(x)).abs())
            .fold(0.0, f64::max)
    }

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());

        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() <= tol, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn constant_function() {
        let interval = Interval::new(-2.0, 5.0).unwrap();
        let approx = remez(|_| 3.0, 0, &interval, &config(25)).unwrap();

        assert_close(approx.polynomial.coefficients(), &[3.0], 1e-12);
        assert!(approx.error_term.abs() < 1e-12);
        assert_eq!(approx.nodes.len(), 2);
    }

    #[test]
    fn identity_function() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let approx = remez(|x| x, 1, &interval, &config(25)).unwrap();

        assert_close(approx.polynomial.coefficients(), &[1.0, 0.0], 1e-12);
        assert!(approx.error_term.abs() < 1e-12);
    }

    #[test]
    fn parabola_reaches_known_fixed_point() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        let square = |x: f64| x * x;
        let approx = remez(square, 1, &interval, &config(50)).unwrap();

        assert_eq!(approx.termination, Termination::IterationLimit);
        assert_eq!(approx.iterations, 50);
        assert_close(approx.polynomial.coefficients(), &[0.0, 0.5], 1e-3);
        assert!((approx.error_term.abs() - 0.5).abs() < 1e-3);
        assert!((approx.max_error - 0.5).abs() < 1e-3);
        assert_close(&approx.nodes, &[-1.0, 0.0, 1.0], 1e-3);

        // Another exchange leaves the nodes where they are.
        let step = exchange(square, &approx.nodes, &interval, 2000).unwrap();
        let next = step.next_nodes(&interval);

        assert!(approx.nodes.max_shift(&next) < 1e-3);
    }

    #[test]
    fn tolerance_stops_settled_nodes() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        let config = config(50).set_tolerance(1e-2).unwrap();
        let approx = remez(|x| x * x, 1, &interval, &config).unwrap();

        assert_eq!(approx.termination, Termination::NodesSettled);
        assert_eq!(approx.iterations, 2);
    }

    #[test]
    fn log1p_beats_taylor() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let approx =
            remez(f64::ln_1p, 6, &interval, &RemezConfig::new()).unwrap();

        assert_eq!(approx.polynomial.coefficients().len(), 7);
        assert_eq!(approx.termination, Termination::IterationLimit);
        assert_eq!(approx.iterations, 2000);
        assert_eq!(approx.nodes.first(), Some(&0.0));
        assert_eq!(approx.nodes.last(), Some(&1.0));

        // x - x^2/2 + ... - x^6/6, highest degree first.
        let taylor = Polynomial::new(vec![
            -1.0 / 6.0,
            1.0 / 5.0,
            -1.0 / 4.0,
            1.0 / 3.0,
            -1.0 / 2.0,
            1.0,
            0.0,
        ]);

        let minimax =
            fine_grid_error(&approx.polynomial, f64::ln_1p, &interval);
        let naive = fine_grid_error(&taylor, f64::ln_1p, &interval);

        assert!(minimax * 10.0 < naive, "{minimax} vs {naive}");
    }

    #[test]
    fn iteration_limit_returns_exchanged_nodes() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let approx = remez(f64::ln_1p, 6, &interval, &config(1)).unwrap();

        assert_eq!(approx.termination, Termination::IterationLimit);
        assert_eq!(approx.iterations, 1);
        assert_eq!(approx.nodes.len(), 8);
        assert_eq!(approx.nodes.first(), Some(&0.0));
        assert_eq!(approx.nodes.last(), Some(&1.0));
        assert_eq!(approx.fitted_nodes, NodeSet::chebyshev(&interval, 8));
    }

    #[test]
    fn exp_on_reduced_range() {
        let interval = Interval::new(-LN_2 / 2.0, LN_2 / 2.0).unwrap();
        let approx = remez(f64::exp, 4, &interval, &config(200)).unwrap();

        let error = fine_grid_error(&approx.polynomial, f64::exp, &interval);

        assert!(error < 1e-5, "{error}");
        assert!(approx.max_error >= 0.99 * approx.error_term.abs());
    }

    #[test]
    fn endpoints_join_after_exchange() {
        let interval = Interval::new(0.0, FRAC_PI_4).unwrap();
        let nodes = NodeSet::chebyshev(&interval, 7);
        let step = exchange(f64::cos, &nodes, &interval, 2000).unwrap();
        let next = step.next_nodes(&interval);

        assert_eq!(next.len(), step.extrema.len() + 2);
        assert_eq!(next.first(), Some(&interval.inf));
        assert_eq!(next.last(), Some(&interval.sup));
        assert!(next.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_interval_is_rejected() {
        assert_eq!(
            run(f64::sin, 3, 1.0, 1.0).unwrap_err(),
            RemezError::Config(ConfigError::EmptyInterval {
                inf: 1.0,
                sup: 1.0
            })
        );
    }

    #[test]
    fn non_finite_function_aborts_run() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let f = |x: f64| if x > 0.5 { f64::NAN } else { x };
        let result = remez(f, 2, &interval, &RemezConfig::new());

        assert!(matches!(
            result,
            Err(RemezError::NonFinite { iteration: 1, .. })
        ));
    }
}
