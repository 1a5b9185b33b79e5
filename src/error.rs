//! Error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ResolveError
// ============================================================================

/// Path resolution errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The config path could not be made absolute.
    #[error("cannot resolve config path `{}`", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dynamic target was not a table.
    #[error("expected table, got {found}")]
    InvalidTarget { found: &'static str },

    /// A `~` path was found but there is no usable home directory.
    #[error("cannot expand `~` in `{field}`: home directory unavailable")]
    HomeDirUnavailable { field: String },
}

impl ResolveError {
    /// Prefix the field path carried by the error with an enclosing key.
    ///
    /// Called by generated code while the error unwinds, so
    /// `user_path` becomes `nested.user_path`.
    pub fn within(self, key: &str) -> Self {
        match self {
            Self::HomeDirUnavailable { field } => Self::HomeDirUnavailable {
                field: join_key(key, &field),
            },
            other => other,
        }
    }
}

fn join_key(key: &str, rest: &str) -> String {
    if rest.is_empty() {
        key.to_string()
    } else if rest.starts_with('[') {
        format!("{key}{rest}")
    } else {
        format!("{key}.{rest}")
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("IO error when reading config source")]
    Read(#[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config path resolution error")]
    Resolve(#[from] ResolveError),
}
