//! Lexical path helpers.
//!
//! Pure functions, no filesystem access:
//! - `absolutize` - make a path absolute against cwd
//! - `clean` - drop `.` and fold `..` components
//! - `strip_tilde` - split a leading `~`

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current working directory.
///
/// Unlike `canonicalize()`, the file does not need to exist.
/// Fails for an empty path or when cwd is unavailable.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }
    std::path::absolute(path).map(|abs| clean(&abs))
}

/// Lexically clean a path.
///
/// `.` components are dropped and `..` pops the previous component,
/// never climbing above the root. Repeated separators collapse.
///
/// # Example
/// ```ignore
/// clean(Path::new("/a/./b/../c")) -> "/a/c"
/// clean(Path::new("/../x"))       -> "/x"
/// ```
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if at_root {
                    // Relative paths keep leading `..`, absolute ones stop at root
                    if !out.has_root() {
                        out.push("..");
                    }
                } else if out.ends_with("..") {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                out.push(c.as_os_str());
            }
        }
    }
    out
}

/// Split a leading `~` off a path string.
///
/// Returns the remainder after the tilde, or `None` if the path
/// does not start with one. Callers append the remainder to the home
/// directory as is, so `~/a` yields `/a` and `~user` yields `user`.
pub fn strip_tilde(path: &str) -> Option<&str> {
    path.strip_prefix('~')
}
