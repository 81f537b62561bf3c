pub mod approx;
pub mod format;
pub mod functions;
pub mod opts;
pub mod utils;
