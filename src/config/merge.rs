//! Merge CLI arguments over file configuration.

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line (or through the environment).
/// `None` and `false` leave the file value in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub output_prefix: Option<String>,
    pub do_github: bool,
    pub no_timestamp: bool,
    pub write_report: bool,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(prefix) = cli.output_prefix {
        config.output_prefix = prefix;
    }
    if cli.do_github {
        config.do_github = true;
    }
    if cli.no_timestamp {
        config.include_timestamp = false;
    }
    if cli.write_report {
        config.write_report = true;
    }
    config
}
