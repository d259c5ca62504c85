//! CLI module for parcelfmt
//!
//! - Argument parsing (`args`)
//! - Runtime setup such as logging (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{init_logging, verbosity_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
