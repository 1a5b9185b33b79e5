//! TOML config sources.
//!
//! A `TomlSource` is the raw document plus, when it came from a file,
//! that file's path. The path is what relative `#[xconf(resolve)]`
//! fields are resolved against.
//!
//! | Constructor          | Where the document comes from                 |
//! |----------------------|-----------------------------------------------|
//! | `with_data`          | in-memory string                              |
//! | `with_reader`        | any `Read`                                    |
//! | `with_file`          | explicit file path                            |
//! | `with_file_env`      | file named by the first set env var           |
//! | `with_file_flag`     | file named by a command-line flag             |
//! | `with_file_sources`  | flag first, then env var                      |
//!
//! Env/flag lookups that find nothing produce an empty source, which
//! processes into `T::default()`.

use crate::{ConfigError, PathResolver, Resolvable, args::parse_arg, debug, log};
use serde::de::DeserializeOwned;
use std::{
    ffi::OsString,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Default)]
pub struct TomlSource {
    data: String,
    path: Option<PathBuf>,
}

impl TomlSource {
    /// Source from an in-memory document.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            path: None,
        }
    }

    /// Source from a reader, read to the end.
    pub fn with_reader(mut reader: impl Read) -> Result<Self, ConfigError> {
        let mut data = String::new();
        reader
            .read_to_string(&mut data)
            .map_err(ConfigError::Read)?;
        Ok(Self::with_data(data))
    }

    /// Source from a file. The path is kept for path resolution.
    pub fn with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        debug!("config"; "loaded {}", path.display());
        Ok(Self {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    /// Source from the file named by the first non-empty env var in `envs`.
///
/// Values are taken as raw OS strings, so non UTF-8 paths are honored.
    pub fn with_file_env(envs: &[&str]) -> Result<Self, ConfigError> {
        Self::with_file_lookup(envs, |name| std::env::var_os(name))
    }

    fn with_file_lookup(
        envs: &[&str],
        lookup: impl Fn(&str) -> Option<OsString>,
    ) -> Result<Self, ConfigError> {
        match envs.iter().find_map(|name| lookup(name).filter(|v| !v.is_empty())) {
            Some(path) => Self::with_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Source from the file named by one of `flags` in `args`.
    pub fn with_file_flag<S: AsRef<str>>(args: &[S], flags: &[&str]) -> Result<Self, ConfigError> {
        match parse_arg(args, flags) {
            Some(path) => Self::with_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Source from a command-line flag, falling back to env vars.
    pub fn with_file_sources<S: AsRef<str>>(
        args: &[S],
        flags: &[&str],
        envs: &[&str],
    ) -> Result<Self, ConfigError> {
        Self::with_file_sources_lookup(args, flags, envs, |name| {
            std::env::var_os(name)
        })
    }

    fn with_file_sources_lookup<S: AsRef<str>>(
        args: &[S],
        flags: &[&str],
        envs: &[&str],
        lookup: impl Fn(&str) -> Option<OsString>,
    ) -> Result<Self, ConfigError> {
        match parse_arg(args, flags) {
            Some(path) => Self::with_file(path),
            None => Self::with_file_lookup(envs, lookup),
        }
    }

    /// Path of the file this source was read from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw document text.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.trim().is_empty()
    }

    /// Parse the document. An empty source yields `T::default()`.
    pub fn process<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        if self.is_empty() {
            return Ok(T::default());
        }
        Ok(toml::from_str(&self.data)?)
    }

    /// Parse the document, collecting any unknown fields.
    pub fn process_with_ignored<T: DeserializeOwned + Default>(
        &self,
    ) -> Result<(T, Vec<String>), ConfigError> {
        if self.is_empty() {
            return Ok((T::default(), Vec::new()));
        }
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(&self.data);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse the document and resolve its annotated path fields.
    ///
    /// Paths are resolved against the source file's directory, or the
    /// current working directory when the source has no file.
    /// Unknown fields are reported as warnings.
    pub fn load<T: DeserializeOwned + Default + Resolvable>(&self) -> Result<T, ConfigError> {
        let (mut config, ignored) = self.process_with_ignored::<T>()?;

        if !ignored.is_empty() {
            self.print_unknown_fields_warning(&ignored);
        }

        let resolver = match self.file_path() {
            Some(path) => PathResolver::from_config_path(path)?,
            None => PathResolver::with_dir(".")?,
        };
        config.resolve_paths(&resolver)?;
        Ok(config)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(&self, fields: &[String]) {
        let display_path = self
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config".to_string());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
