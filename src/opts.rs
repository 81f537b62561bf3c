use argh::FromArgs;
use log::LevelFilter;

use crate::approx::config::{DEFAULT_MAX_ITER, DEFAULT_SAMPLE_COUNT};
use crate::format::Endpoint;
use crate::functions::Builtin;

/// Minimax polynomial approximation by Remez exchange.
#[derive(FromArgs)]
pub struct Opts {
    /// function to approximate
    #[argh(positional, from_str_fn(parse_function))]
    pub function: Builtin,

    /// polynomial degree
    #[argh(option, short = 'd', default = "4")]
    pub degree: usize,

    /// left endpoint of the interval (e.g. 0, -pi/4, -ln2/2)
    #[argh(option, short = 'a')]
    pub left: Endpoint,

    /// right endpoint of the interval
    #[argh(option, short = 'b')]
    pub right: Endpoint,

    /// maximum number of exchange iterations
    #[argh(option, default = "DEFAULT_MAX_ITER")]
    pub max_iter: usize,

    /// number of points the error curve is sampled at
    #[argh(option, default = "DEFAULT_SAMPLE_COUNT")]
    pub samples: usize,

    /// stop once no node moves by more than this amount
    #[argh(option)]
    pub tolerance: Option<f64>,

    /// variable name used in the Horner form
    #[argh(option, default = "String::from(\"r\")")]
    pub variable: String,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

fn parse_function(name: &str) -> Result<Builtin, String> {
    Builtin::lookup(name).map_err(|err| err.to_string())
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}
