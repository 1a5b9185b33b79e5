//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Env var consulted when `--toml-file` is not given.
pub const TOML_FILE_ENV: &str = "XCONF_TOML_FILE";

/// Load a TOML config, resolve its path fields and print it as JSON
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: $XCONF_TOML_FILE)
    #[arg(short = 't', long, value_hint = clap::ValueHint::FilePath)]
    pub toml_file: Option<PathBuf>,

    /// Print each path rewrite
    #[arg(short, long)]
    pub verbose: bool,
}
