//! Path resolution over untyped `toml::Value` documents.
//!
//! Fields are given as dotted key paths (`nested.rel_path`) instead of
//! attributes. Arrays met along the way are walked element-wise, so
//! `mounts.source` reaches every `[[mounts]]` table. Errors name the
//! concrete element, e.g. `mounts[1].source`.

use super::{PathResolver, Resolvable};
use crate::ResolveError;
use std::path::Path;
use toml::Value;

/// Resolve the string values at `fields` inside `value`.
///
/// The root must be a table, otherwise `InvalidTarget` is returned before
/// anything is touched. Missing keys are skipped.
pub fn resolve_value<S: AsRef<str>>(
    config_path: impl AsRef<Path>,
    value: &mut Value,
    fields: &[S],
) -> Result<(), ResolveError> {
    if !value.is_table() {
        return Err(ResolveError::InvalidTarget {
            found: value.type_str(),
        });
    }

    let resolver = PathResolver::from_config_path(config_path)?;
    for field in fields {
        let keys: Vec<&str> = field.as_ref().split('.').collect();
        resolve_at(&resolver, value, &keys)?;
    }
    Ok(())
}

/// Resolve `value` using the annotated fields of `T`.
pub fn resolve_value_as<T: Resolvable>(
    config_path: impl AsRef<Path>,
    value: &mut Value,
) -> Result<(), ResolveError> {
    resolve_value(config_path, value, &T::resolvable_fields())
}

fn resolve_at(resolver: &PathResolver, value: &mut Value, keys: &[&str]) -> Result<(), ResolveError> {
    let Some((key, rest)) = keys.split_first() else {
        return resolve_leaf(resolver, value);
    };

    match value {
        Value::Table(table) => match table.get_mut(*key) {
            Some(child) => resolve_at(resolver, child, rest).map_err(|e| e.within(key)),
            None => Ok(()),
        },
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                resolve_at(resolver, item, keys).map_err(|e| e.within(&format!("[{i}]")))?;
            }
            Ok(())
        }
        other => Err(ResolveError::InvalidTarget {
            found: other.type_str(),
        }),
    }
}

fn resolve_leaf(resolver: &PathResolver, value: &mut Value) -> Result<(), ResolveError> {
    match value {
        Value::String(s) => {
            if let Some(resolved) = resolver.resolve_str(s)? {
                *s = resolved;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                resolve_leaf(resolver, item).map_err(|e| e.within(&format!("[{i}]")))?;
            }
            Ok(())
        }
        // Only strings hold paths
        _ => Ok(()),
    }
}
