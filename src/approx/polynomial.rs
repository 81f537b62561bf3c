//! Dense univariate polynomials.

/// A real polynomial with coefficients ordered from the highest-degree term
/// down to the constant term.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Constructs a polynomial from its coefficients, highest degree first.
    ///
    /// An empty coefficient list denotes the zero polynomial.
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Nominal degree, i.e. one less than the number of coefficients. Leading
    /// zeros are not stripped.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    ///
    /// # Examples
    ///
    /// ```
    /// # use remez_nums::approx::Polynomial;
    /// #
    /// let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
    ///
    /// assert_eq!(p.eval(0.0), 1.0);
    /// assert_eq!(p.eval(2.0), 3.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_and_zero_polynomial() {
        let zero = Polynomial::new(vec![]);

        assert_eq!(zero.degree(), 0);
        assert_eq!(zero.eval(3.5), 0.0);

        let cubic = Polynomial::new(vec![1.0, 0.0, 0.0, -1.0]);

        assert_eq!(cubic.degree(), 3);
        assert_eq!(cubic.eval(2.0), 7.0);
        assert_eq!(cubic.eval(-1.0), -2.0);
    }
}
