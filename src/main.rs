//! xconf - load a TOML config, resolve its paths and print it.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, TOML_FILE_ENV};
use serde::{Deserialize, Serialize};
use xconf::{Resolvable, TomlSource, log};

/// `[nested]` section.
#[derive(Debug, Default, Serialize, Deserialize, Resolvable)]
#[serde(default)]
struct Nested {
    name: String,
    number: i64,
    #[xconf(resolve)]
    user_path: String,
    #[xconf(resolve)]
    rel_path: String,
}

/// Demo config schema.
#[derive(Debug, Default, Serialize, Deserialize, Resolvable)]
#[serde(default)]
struct Config {
    log_level: String,
    enable_config: bool,
    #[xconf(sub)]
    nested: Nested,
}

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    xconf::logger::set_verbose(cli.verbose);

    let source = match &cli.toml_file {
        Some(path) => TomlSource::with_file(path)?,
        None => TomlSource::with_file_env(&[TOML_FILE_ENV])?,
    };
    if source.file_path().is_none() {
        log!("config"; "no config file given, using defaults");
    }

    let config: Config = source.load().context("loading config")?;

    let json = serde_json::to_string_pretty(&config)?;
    println!("{json}");
    Ok(())
}
