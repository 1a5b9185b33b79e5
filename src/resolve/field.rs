//! Leaf types accepted by `#[xconf(resolve)]`.

use super::PathResolver;
use crate::ResolveError;
use std::path::PathBuf;

/// A field value that holds one or more path strings.
///
/// Annotating a field of any other type fails to compile.
pub trait PathField {
    /// Rewrite the held path(s) in place.
    fn resolve_field(&mut self, resolver: &PathResolver) -> Result<(), ResolveError>;
}

impl PathField for String {
    fn resolve_field(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        if let Some(resolved) = resolver.resolve_str(self)? {
            *self = resolved;
        }
        Ok(())
    }
}

impl PathField for PathBuf {
    fn resolve_field(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        if let Some(resolved) = resolver.resolve_path(self)? {
            *self = resolved;
        }
        Ok(())
    }
}

impl<T: PathField> PathField for Option<T> {
    fn resolve_field(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        match self {
            Some(inner) => inner.resolve_field(resolver),
            None => Ok(()),
        }
    }
}

impl<T: PathField> PathField for Vec<T> {
    fn resolve_field(&mut self, resolver: &PathResolver) -> Result<(), ResolveError> {
        for (i, item) in self.iter_mut().enumerate() {
            item.resolve_field(resolver)
                .map_err(|e| e.within(&format!("[{i}]")))?;
        }
        Ok(())
    }
}
