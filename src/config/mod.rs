//! Configuration loading and merging
//!
//! Precedence: CLI > environment > config file > defaults. Environment
//! values arrive through clap, so they merge together with CLI arguments.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
