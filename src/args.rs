//! Minimal command-line flag scanning.
//!
//! Finds a config file flag without taking over argument parsing,
//! so it can run before (or alongside) the application's own CLI parser.

/// Find the value of the first argument matching any of `flags`.
///
/// Both `--flag=value` and `--flag value` forms are accepted. Arguments
/// are scanned in order, so the earliest matching argument wins even if
/// its flag is listed later in `flags`. A flag in last position without
/// a value does not match; an explicit empty value (`--flag=`) yields `None`.
///
/// # Example
/// ```ignore
/// let args = ["app", "--toml-file", "conf/app.toml"];
/// assert_eq!(parse_arg(&args, &["--toml-file", "-tf"]).as_deref(), Some("conf/app.toml"));
/// ```
pub fn parse_arg<S: AsRef<str>>(args: &[S], flags: &[&str]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        for flag in flags {
            if let Some(value) = arg.strip_prefix(flag).and_then(|r| r.strip_prefix('=')) {
                return Some(value.to_string()).filter(|v| !v.is_empty());
            }

            if arg == *flag
                && let Some(next) = args.get(i + 1)
            {
                return Some(next.as_ref().to_string()).filter(|v| !v.is_empty());
            }
        }
    }

    None
}

// ============================================================================
// tests
// ============================================================================
