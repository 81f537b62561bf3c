//! Levelled-error polynomial fits.

use nalgebra::{DMatrix, DVector};

use super::{NodeSet, NumericError, Polynomial};

/// Relative spacing below which two nodes are treated as coincident.
const MIN_RELATIVE_SPACING: f64 = 4.0 * f64::EPSILON;

/// Finds the polynomial of degree `nodes.len() - 2` whose error alternates in
/// sign with equal magnitude across the nodes.
///
/// Row `i` of the system reads
///
/// ```text
/// c_0 x_i^(m-2) + ... + c_(m-2) + s_i e = f(x_i)
/// ```
///
/// where `s_i` is the alternating sign attached to node `i` by [`NodeSet`].
/// Returns the coefficients and the levelled error `e`. Every fitted node
/// satisfies `p(x_i) - f(x_i) = -s_i e`.
pub fn find_polynomial<F>(
    nodes: &NodeSet,
    f: F,
) -> Result<(Polynomial, f64), NumericError>
where
    F: Fn(f64) -> f64,
{
    let m = nodes.len();

    if m < 2 {
        return Err(NumericError::Singular);
    }

    check_spacing(nodes)?;

    let mut a = DMatrix::<f64>::zeros(m, m);
    let mut b = DVector::<f64>::zeros(m);

    for (i, (x, sign)) in nodes.signed().enumerate() {
        let fx = f(x);

        if !fx.is_finite() {
            return Err(NumericError::NonFinite { x, fx });
        }

        // Vandermonde columns, highest power first.
        let mut power = 1.0;
        for j in (0..m - 1).rev() {
            a[(i, j)] = power;
            power *= x;
        }

        a[(i, m - 1)] = sign;
        b[i] = fx;
    }

    let solution = a.lu().solve(&b).ok_or(NumericError::Singular)?;

    if solution.iter().any(|v| !v.is_finite()) {
        return Err(NumericError::Singular);
    }

    let error = solution[m - 1];
    let coefficients = solution.iter().take(m - 1).copied().collect();

    Ok((Polynomial::new(coefficients), error))
}

fn check_spacing(nodes: &[f64]) -> Result<(), NumericError> {
    if let Some(&x) = nodes.iter().find(|x| !x.is_finite()) {
        return Err(NumericError::NonFinite { x, fx: f64::NAN });
    }

    let scale = nodes.iter().fold(1.0_f64, |acc, x| acc.max(x.abs()));

    let coincident = nodes
        .windows(2)
        .any(|w| w[1] - w[0] <= MIN_RELATIVE_SPACING * scale);

    if coincident {
        Err(NumericError::Singular)
    } else {
        Ok(())
    }
}
