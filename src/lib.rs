//! xconf - TOML config loading with path resolution.
//!
//! Locate a config document (flag, env var, file, reader or data), parse it
//! with serde, then rewrite fields marked `#[xconf(resolve)]` into absolute
//! paths relative to the config file's directory or the user's home.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── resolve/       # PathResolver, Resolvable, dynamic toml::Value resolution
//! ├── source         # TomlSource (data, reader, file, env, flag)
//! ├── args           # parse_arg flag scanner
//! ├── error          # ResolveError, ConfigError
//! └── logger         # log! / debug! macros
//! ```
//!
//! # Example
//!
//! ```ignore
//! use serde::Deserialize;
//! use xconf::{Resolvable, TomlSource};
//!
//! #[derive(Debug, Default, Deserialize, Resolvable)]
//! #[serde(default)]
//! struct Config {
//!     #[xconf(resolve)]
//!     data_dir: String,
//! }
//!
//! let source = TomlSource::with_file_sources(&args, &["--toml-file", "-tf"], &["APP_TOML_FILE"])?;
//! let config: Config = source.load()?;
//! ```

// Lets derive-generated `::xconf::` paths resolve inside this crate too
extern crate self as xconf;

pub mod args;
mod error;
pub mod logger;
pub mod resolve;
pub mod source;

pub use args::parse_arg;
pub use error::{ConfigError, ResolveError};
pub use macros::Resolvable;
pub use resolve::{
    PathField, PathResolver, Resolvable, field_path, resolve_paths, resolve_value,
    resolve_value_as,
};
pub use source::TomlSource;
