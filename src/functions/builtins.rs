//! Built-in functions.

use std::error::Error;
use std::fmt;

use itertools::Itertools;
use strum::VariantNames;
use strum_macros::{EnumString, IntoStaticStr, VariantNames};

/// A named real function available as an approximation target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Builtin {
    Exp,
    Expm1,
    #[strum(to_string = "ln", serialize = "log")]
    Ln,
    Log1p,
    Log2,
    Sin,
    Cos,
    Tan,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Cbrt,
}

impl Builtin {
    pub const NAMES: &[&str] = <Self as VariantNames>::VARIANTS;

    /// Looks up a builtin by name. The alias `log` resolves to `ln`.
    pub fn lookup(name: &str) -> Result<Builtin, UnknownFunction> {
        name.parse().map_err(|_| UnknownFunction(String::from(name)))
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            Builtin::Exp => x.exp(),
            Builtin::Expm1 => x.exp_m1(),
            Builtin::Ln => x.ln(),
            Builtin::Log1p => x.ln_1p(),
            Builtin::Log2 => x.log2(),
            Builtin::Sin => x.sin(),
            Builtin::Cos => x.cos(),
            Builtin::Tan => x.tan(),
            Builtin::Atan => x.atan(),
            Builtin::Sinh => x.sinh(),
            Builtin::Cosh => x.cosh(),
            Builtin::Tanh => x.tanh(),
            Builtin::Sqrt => x.sqrt(),
            Builtin::Cbrt => x.cbrt(),
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A function name outside the builtin catalogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFunction(pub String);

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown function `{}` (expected one of: {})",
            self.0,
            Builtin::NAMES.iter().join(", ")
        )
    }
}

impl Error for UnknownFunction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        assert_eq!("log1p".parse(), Ok(Builtin::Log1p));
        assert_eq!("log".parse(), Ok(Builtin::Ln));
        assert_eq!(Builtin::Ln.name(), "ln");
        assert_eq!(Builtin::Expm1.name(), "expm1");
        assert!("erf".parse::<Builtin>().is_err());
        assert!(Builtin::NAMES.contains(&"cbrt"));
    }

    #[test]
    fn unknown_name_lists_catalogue() {
        let err = Builtin::lookup("erf").unwrap_err();

        assert_eq!(err, UnknownFunction(String::from("erf")));

        let message = err.to_string();

        assert!(message.starts_with("unknown function `erf`"));
        assert!(Builtin::NAMES.iter().all(|name| message.contains(name)));
        assert_eq!(Builtin::lookup("log"), Ok(Builtin::Ln));
    }

    #[test]
    fn evaluation() {
        assert_eq!(Builtin::Exp.eval(0.0), 1.0);
        assert_eq!(Builtin::Sqrt.eval(9.0), 3.0);

        let ln2 = Builtin::Log1p.eval(1.0);

        assert!((ln2 - std::f64::consts::LN_2).abs() < 1e-15);
    }
}
