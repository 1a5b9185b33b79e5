//! Path resolution for config structures.
//!
//! Fields marked `#[xconf(resolve)]` are rewritten into absolute paths:
//!
//! | Value          | Result                                   |
//! |----------------|------------------------------------------|
//! | `""`           | unchanged                                |
//! | `/abs/path`    | unchanged                                |
//! | `~/files.txt`  | `<home>/files.txt`                       |
//! | `./files.txt`  | `<config dir>/files.txt`                 |
//!
//! Fields marked `#[xconf(sub)]` are walked recursively with the same
//! base directory. Everything else is left alone.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Deserialize, Resolvable)]
//! struct Config {
//!     #[xconf(resolve)]
//!     rel_path: String,
//! }
//!
//! let mut cfg = Config { rel_path: "./files.txt".into() };
//! resolve_paths("/path/to/configdir/config.toml", &mut cfg)?;
//! assert_eq!(cfg.rel_path, "/path/to/configdir/files.txt");
//! ```

mod field;
pub mod path;
mod value;

#[cfg(test)]
mod tests;

pub use field::PathField;
pub use value::{resolve_value, resolve_value_as};

use crate::{ResolveError, debug};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// A config structure whose path fields can be resolved.
///
/// Implemented by `#[derive(Resolvable)]` for structs, and for
/// `Option<T>`, `Box<T>` and `Vec<T>` of resolvable types.
pub trait Resolvable {
    /// Rewrite every annotated path field reachable from `self`.
    fn resolve_paths(&mut self, resolver: &PathResolver) -> Result<(), ResolveError>;

    /// Push the dotted key path of every annotated field under `prefix`.
    fn collect_fields(prefix: &str, out: &mut Vec<String>)
    where
        Self: Sized,
    {
        let _ = (prefix, out);
    }

    /// Dotted key paths of every annotated field.
    fn resolvable_fields() -> Vec<String>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        Self::collect_fields("", &mut out);
        out
    }
}

/// Join a field key onto a dotted prefix.
pub fn field_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Resolve all annotated paths in `target` relative to `config_path`'s directory.
///
/// `config_path` may be relative, it is made absolute against the current
/// working directory first. The file itself is never opened.
///
/// Traversal is not transactional: on error, fields visited earlier
/// stay rewritten.
pub fn resolve_paths<T: Resolvable + ?Sized>(
    config_path: impl AsRef<Path>,
    target: &mut T,
) -> Result<(), ResolveError> {
    let resolver = PathResolver::from_config_path(config_path)?;
    target.resolve_paths(&resolver)
}

// ============================================================================
// PathResolver
// ============================================================================

/// Rewrites path strings against a fixed base directory.
///
/// The home directory is looked up at most once, and only when a
/// `~` path is actually encountered.
#[derive(Debug)]
pub struct PathResolver {
    config_dir: PathBuf,
    home: fn() -> Option<PathBuf>,
    home_cache: OnceCell<Option<PathBuf>>,
}

impl PathResolver {
    /// Create a resolver for paths relative to the config file's directory.
    pub fn from_config_path(config_path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let config_path = config_path.as_ref();
        let abs =
            path::absolutize(config_path).map_err(|source| ResolveError::PathResolution {
                path: config_path.to_path_buf(),
                source,
            })?;

        let config_dir = match abs.parent() {
            Some(parent) => parent.to_path_buf(),
            None => abs,
        };
        Ok(Self::new(config_dir))
    }

    /// Create a resolver for paths relative to `dir`.
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let dir = dir.as_ref();
        let config_dir = path::absolutize(dir).map_err(|source| ResolveError::PathResolution {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self::new(config_dir))
    }

    fn new(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            home: dirs::home_dir,
            home_cache: OnceCell::new(),
        }
    }

    /// Replace the home directory lookup (default: `dirs::home_dir`).
    pub fn with_home(mut self, home: fn() -> Option<PathBuf>) -> Self {
        self.home = home;
        self.home_cache = OnceCell::new();
        self
    }

    /// Base directory relative paths are joined onto.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Usable home directory: present, non-empty and absolute.
    fn home_dir(&self) -> Option<&Path> {
        self.home_cache
            .get_or_init(|| (self.home)().filter(|h| h.is_absolute()))
            .as_deref()
    }

    /// Resolve a path string.
    ///
    /// Returns `Ok(None)` when the value must stay as it is
    /// (empty or already absolute).
    pub fn resolve_str(&self, value: &str) -> Result<Option<String>, ResolveError> {
        if value.is_empty() || Path::new(value).is_absolute() {
            return Ok(None);
        }

        let resolved = match path::strip_tilde(value) {
            // Literal replacement, never cleaned
            Some(rest) => {
                let home = self.home_dir().ok_or(ResolveError::HomeDirUnavailable {
                    field: String::new(),
                })?;
                let mut expanded = home.to_string_lossy().into_owned();
                expanded.push_str(rest);
                expanded
            }
            None => path::clean(&self.config_dir.join(value))
                .to_string_lossy()
                .into_owned(),
        };

        debug!("resolve"; "{} -> {}", value, resolved);
        Ok(Some(resolved))
    }

    /// Resolve a filesystem path.
    ///
    /// UTF-8 paths behave exactly like `resolve_str`. Non UTF-8 relative
    /// paths are joined onto the base directory.
    pub fn resolve_path(&self, value: &Path) -> Result<Option<PathBuf>, ResolveError> {
        match value.to_str() {
            Some(s) => Ok(self.resolve_str(s)?.map(PathBuf::from)),
            None if value.is_absolute() => Ok(None),
            None => Ok(Some(path::clean(&self.config_dir.join(value)))),
        }
    }
}

// ============================================================================
// Composite impls
// ============================================================================

impl<T: Resolvable> Resolvable for Option<T> {
    fn resolve_paths(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        match self {
            Some(inner) => inner.resolve_paths(resolver),
            None => Ok(()),
        }
    }

    fn collect_fields(prefix: &str, out: &mut Vec<String>) {
        T::collect_fields(prefix, out);
    }
}

impl<T: Resolvable> Resolvable for Box<T> {
    fn resolve_paths(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        (**self).resolve_paths(resolver)
    }

    fn collect_fields(prefix: &str, out: &mut Vec<String>) {
        T::collect_fields(prefix, out);
    }
}

impl<T: Resolvable> Resolvable for Vec<T> {
    fn resolve_paths(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        for (i, item) in self.iter_mut().enumerate() {
            item.resolve_paths(resolver)
                .map_err(|e| e.within(&format!("[{i}]")))?;
        }
        Ok(())
    }

    // Array-of-tables share the element's key paths
    fn collect_fields(prefix: &str, out: &mut Vec<String>) {
        T::collect_fields(prefix, out);
    }
}
