//! CLI module - argument parsing and the conversion entry point

mod args;
pub mod convert;

pub use args::{Cli, Config, Delimiter};
pub use convert::{convert, run_convert};
