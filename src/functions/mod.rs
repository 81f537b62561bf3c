//! Target functions.

pub mod builtins;

pub use builtins::{Builtin, UnknownFunction};
