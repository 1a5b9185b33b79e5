//! Proc macros for xconf.
//!
//! # Resolvable derive macro
//!
//! Generates the path-resolution walker for a config struct.
//!
//! ```ignore
//! #[derive(Deserialize, Resolvable)]
//! pub struct StorageConfig {
//!     /// Resolved against the config file's directory.
//!     #[xconf(resolve)]
//!     pub data_dir: String,
//!
//!     /// `~/.cache/app` becomes `/home/user/.cache/app`.
//!     #[xconf(resolve)]
//!     pub cache_dir: Option<PathBuf>,
//!
//!     /// Walked with the same base directory.
//!     #[xconf(sub)]
//!     pub backup: Option<BackupConfig>,
//!
//!     /// Never touched.
//!     pub label: String,
//! }
//!
//! // Generates:
//! // - impl Resolvable for StorageConfig
//! //   - resolve_paths(&mut self, &PathResolver)
//! //   - collect_fields(prefix, out) -> ["data_dir", "cache_dir", "backup.*"]
//! ```
//!
//! # Attributes
//!
//! Field-level:
//! - `#[xconf(resolve)]` - Rewrite this path field in place
//! - `#[xconf(sub)]` - Recurse into this nested config
//! - `#[xconf(name = "x")]` - Document key used in field paths
//!
//! Without `name`, `#[serde(rename = "x")]` is honored, then the field ident.

mod resolve;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates `impl xconf::Resolvable`.
#[proc_macro_derive(Resolvable, attributes(xconf))]
pub fn derive_resolvable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    resolve::derive(&input).into()
}
