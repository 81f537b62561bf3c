//! Textual forms of interval endpoints and polynomials.

use std::f64::consts::{E, LN_2, PI};
use std::fmt::{self, Write};
use std::num::ParseFloatError;
use std::str::FromStr;

use itertools::{Itertools, PeekingNext, Position};
use strum_macros::EnumString;

use crate::approx::Polynomial;

/// A polynomial rendered in nested Horner form, constant term first.
pub struct Horner<'a> {
    pub polynomial: &'a Polynomial,
    pub variable: &'a str,
}

impl<'a> Horner<'a> {
    pub fn new(polynomial: &'a Polynomial, variable: &'a str) -> Horner<'a> {
        Horner {
            polynomial,
            variable,
        }
    }
}

impl fmt::Display for Horner<'_> {
    /// Writes `c0 + r * (c1 + r * (... + r * (cn)))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use remez_nums::approx::Polynomial;
    /// # use remez_nums::format::Horner;
    /// #
    /// let p = Polynomial::new(vec![3.0, 2.0, 1.0]);
    /// let horner = Horner::new(&p, "r");
    ///
    /// assert_eq!(horner.to_string(), "1 + r * (2 + r * (3))");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let coefficients = self.polynomial.coefficients();

        if coefficients.is_empty() {
            return f.write_char('0');
        }

        for (pos, c) in coefficients.iter().rev().with_position() {
            write!(f, "{c}")?;

            if !matches!(pos, Position::Last | Position::Only) {
                write!(f, " + {} * (", self.variable)?;
            }
        }

        for _ in 1..coefficients.len() {
            f.write_char(')')?;
        }

        Ok(())
    }
}

impl fmt::Display for Polynomial {
    /// Writes the coefficient list, highest degree first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.coefficients().iter().format(", "))
    }
}

#[derive(Clone, Copy, EnumString)]
enum Constant {
    #[strum(serialize = "pi")]
    Pi,
    #[strum(serialize = "e")]
    E,
    #[strum(serialize = "ln2")]
    Ln2,
}

impl Constant {
    fn value(self) -> f64 {
        match self {
            Constant::Pi => PI,
            Constant::E => E,
            Constant::Ln2 => LN_2,
        }
    }
}

/// An interval endpoint given as a decimal or a scaled named constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoint(pub f64);

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    /// Parses `[-]atom[/divisor | *factor]`, where `atom` is a decimal
    /// number or one of `pi`, `e`, `ln2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::f64::consts::{FRAC_PI_4, LN_2};
    /// # use remez_nums::format::Endpoint;
    /// #
    /// assert_eq!("0.5".parse(), Ok(Endpoint(0.5)));
    /// assert_eq!("pi/4".parse(), Ok(Endpoint(FRAC_PI_4)));
    /// assert_eq!("-ln2/2".parse(), Ok(Endpoint(-LN_2 / 2.0)));
    /// assert!("tau".parse::<Endpoint>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut iter = s.trim().chars();
        let negate = iter.peeking_next(|&c| c == '-').is_some();
        let rest = iter.as_str();

        let (atom, scale) = match rest.find(|c: char| c == '/' || c == '*') {
            Some(split) => {
                let operand: f64 = rest[split + 1..].parse()?;

                if rest.as_bytes()[split] == b'/' {
                    (&rest[..split], operand.recip())
                } else {
                    (&rest[..split], operand)
                }
            }
            None => (rest, 1.0),
        };

        let base = match Constant::from_str(atom) {
            Ok(constant) => constant.value(),
            Err(_) => atom.parse()?,
        };

        let value = if negate { -base * scale } else { base * scale };

        if value.is_finite() {
            Ok(Endpoint(value))
        } else {
            Err(ParseEndpointError)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseEndpointError;

impl From<ParseFloatError> for ParseEndpointError {
    fn from(_: ParseFloatError) -> Self {
        ParseEndpointError
    }
}

impl fmt::Display for ParseEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid endpoint")
    }
}
