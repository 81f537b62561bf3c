use std::process::ExitCode;

use itertools::Itertools;

use remez_nums::approx::{
    self, Approximation, ConfigError, RemezConfig, RemezError,
};
use remez_nums::format::Horner;
use remez_nums::opts::Opts;
use remez_nums::utils::Interval;

fn configure(opts: &Opts) -> Result<RemezConfig, ConfigError> {
    let config = RemezConfig::new()
        .set_max_iter(opts.max_iter)?
        .set_sample_count(opts.samples)?;

    match opts.tolerance {
        Some(tol) => config.set_tolerance(tol),
        None => Ok(config),
    }
}

fn approximate(opts: &Opts) -> Result<Approximation, RemezError> {
    let interval = Interval::new(opts.left.0, opts.right.0)?;
    let config = configure(opts)?;
    let function = opts.function;

    log::info!(
        "approximating {} by a degree {} polynomial over {interval}",
        function.name(),
        opts.degree
    );

    approx::remez(|x| function.eval(x), opts.degree, &interval, &config)
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    let approx = match approximate(&opts) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    println!("coefficients: {}", approx.polynomial);
    println!("horner: {}", Horner::new(&approx.polynomial, &opts.variable));
    println!("nodes: [{}]", approx.nodes.iter().format(", "));
    println!("levelled error: {:e}", approx.error_term.abs());
    println!("max error: {:e}", approx.max_error);
    println!("iterations: {} ({})", approx.iterations, approx.termination);

    ExitCode::SUCCESS
}
