//! Traversal tests driven by `#[derive(Resolvable)]`.

use super::*;
use crate::Resolvable;
use std::path::PathBuf;

const CONFIG_PATH: &str = "/path/to/configdir/config.yaml";

fn resolver() -> PathResolver {
    PathResolver::from_config_path(CONFIG_PATH)
        .unwrap()
        .with_home(|| Some(PathBuf::from("/home/tester")))
}

fn no_home() -> PathResolver {
    PathResolver::from_config_path(CONFIG_PATH)
        .unwrap()
        .with_home(|| None)
}

// ============================================================================
// fixtures
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Resolvable)]
struct TConfig {
    #[xconf(resolve)]
    user_dir: String,
    #[xconf(resolve)]
    rel_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Resolvable)]
struct Nested {
    name: String,
    number: i64,
    #[xconf(resolve)]
    user_path: String,
    #[xconf(resolve)]
    rel_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Resolvable)]
struct Deep {
    #[xconf(resolve)]
    path: PathBuf,
    #[xconf(sub)]
    inner: Nested,
}

#[derive(Debug, Clone, Default, PartialEq, Resolvable)]
struct Root {
    log_level: String,
    #[xconf(resolve)]
    log_file: Option<String>,
    #[xconf(sub)]
    first: Nested,
    #[xconf(sub)]
    second: Nested,
    #[xconf(sub)]
    optional: Option<Nested>,
    #[xconf(sub)]
    boxed: Box<Deep>,
    #[xconf(sub, name = "mount")]
    mounts: Vec<Nested>,
}

fn nested(user_path: &str, rel_path: &str) -> Nested {
    Nested {
        name: "./looks/relative".into(),
        number: 7,
        user_path: user_path.into(),
        rel_path: rel_path.into(),
    }
}

// ============================================================================
// leaf behavior
// ============================================================================

#[test]
fn test_home_and_relative() {
    let mut config = TConfig {
        user_dir: "~/files.txt".into(),
        rel_path: "./files.txt".into(),
    };

    config.resolve_paths(&resolver()).unwrap();

    assert_eq!(config.user_dir, "/home/tester/files.txt");
    assert_eq!(config.rel_path, "/path/to/configdir/files.txt");
}

#[test]
fn test_home_from_environment() {
    let Some(home) = dirs::home_dir().filter(|h| h.is_absolute()) else {
        return;
    };
    let mut config = TConfig {
        user_dir: "~/files.txt".into(),
        rel_path: "./files.txt".into(),
    };

    resolve_paths(CONFIG_PATH, &mut config).unwrap();

    assert_eq!(config.user_dir, format!("{}/files.txt", home.display()));
    assert_eq!(config.rel_path, "/path/to/configdir/files.txt");
}

#[test]
fn test_home_replaced_literally() {
    let r = PathResolver::from_config_path(CONFIG_PATH)
        .unwrap()
        .with_home(|| Some(PathBuf::from("/home/tester/")));
    let mut config = TConfig {
        user_dir: "~/files.txt".into(),
        rel_path: "~/link/../files.txt".into(),
    };

    config.resolve_paths(&r).unwrap();

    assert_eq!(config.user_dir, "/home/tester//files.txt");
    assert_eq!(config.rel_path, "/home/tester/link/../files.txt");

    // relative paths are still cleaned
    config.rel_path = "./a/../files.txt".into();
    config.resolve_paths(&r).unwrap();
    assert_eq!(config.rel_path, "/path/to/configdir/files.txt");
}

#[test]
fn test_empty_unchanged() {
    let mut config = TConfig::default();
    config.resolve_paths(&resolver()).unwrap();
    assert_eq!(config, TConfig::default());
}

#[test]
fn test_absolute_unchanged() {
    let mut config = TConfig {
        user_dir: "/var/lib/app".into(),
        rel_path: "/etc/app/files.txt".into(),
    };
    let before = config.clone();

    config.resolve_paths(&no_home()).unwrap();

    assert_eq!(config, before);
}

#[test]
fn test_idempotent() {
    let mut config = TConfig {
        user_dir: "~/files.txt".into(),
        rel_path: "../sibling/files.txt".into(),
    };
    let r = resolver();

    config.resolve_paths(&r).unwrap();
    let once = config.clone();
    config.resolve_paths(&r).unwrap();

    assert_eq!(config, once);
    assert_eq!(config.rel_path, "/path/to/sibling/files.txt");
}

#[test]
fn test_untagged_fields_untouched() {
    let mut n = nested("~/u", "r");
    n.resolve_paths(&resolver()).unwrap();

    assert_eq!(n.name, "./looks/relative");
    assert_eq!(n.number, 7);
    assert_eq!(n.user_path, "/home/tester/u");
    assert_eq!(n.rel_path, "/path/to/configdir/r");
}

#[test]
fn test_home_unavailable() {
    let mut config = TConfig {
        user_dir: "~/files.txt".into(),
        rel_path: "./files.txt".into(),
    };

    let err = config.resolve_paths(&no_home()).unwrap_err();

    match err {
        ResolveError::HomeDirUnavailable { field } => assert_eq!(field, "user_dir"),
        other => panic!("unexpected error: {other}"),
    }
    // Fields after the failure are not visited
    assert_eq!(config.rel_path, "./files.txt");
}

#[test]
fn test_home_not_needed_without_tilde() {
    let mut config = TConfig {
        user_dir: String::new(),
        rel_path: "files.txt".into(),
    };
    config.resolve_paths(&no_home()).unwrap();
    assert_eq!(config.rel_path, "/path/to/configdir/files.txt");
}

// ============================================================================
// traversal
// ============================================================================

fn root() -> Root {
    Root {
        log_level: "info".into(),
        log_file: Some("logs/app.log".into()),
        first: nested("~/first", "first.txt"),
        second: nested("~/second", "second.txt"),
        optional: Some(nested("", "optional.txt")),
        boxed: Box::new(Deep {
            path: PathBuf::from("deep"),
            inner: nested("/abs/deep", "deep/inner.txt"),
        }),
        mounts: vec![nested("~/m0", "m0"), nested("~/m1", "m1")],
    }
}

#[test]
fn test_nested_same_base_dir() {
    let mut config = root();
    config.resolve_paths(&resolver()).unwrap();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_file.as_deref(), Some("/path/to/configdir/logs/app.log"));
    assert_eq!(config.first.user_path, "/home/tester/first");
    assert_eq!(config.first.rel_path, "/path/to/configdir/first.txt");
    assert_eq!(config.boxed.path, PathBuf::from("/path/to/configdir/deep"));
    assert_eq!(config.boxed.inner.user_path, "/abs/deep");
    assert_eq!(config.boxed.inner.rel_path, "/path/to/configdir/deep/inner.txt");
}

/// Every nested section is visited, not only the first one at each level.
#[test]
fn test_all_sibling_sections_resolved() {
    let mut config = root();
    config.resolve_paths(&resolver()).unwrap();

    assert_eq!(config.second.user_path, "/home/tester/second");
    assert_eq!(config.second.rel_path, "/path/to/configdir/second.txt");
    let optional = config.optional.as_ref().unwrap();
    assert_eq!(optional.user_path, "");
    assert_eq!(optional.rel_path, "/path/to/configdir/optional.txt");
    assert_eq!(config.mounts[1].rel_path, "/path/to/configdir/m1");
}

#[test]
fn test_none_section_skipped() {
    let mut config = Root {
        optional: None,
        log_file: None,
        ..root()
    };
    config.resolve_paths(&resolver()).unwrap();
    assert!(config.optional.is_none());
    assert!(config.log_file.is_none());
}

#[test]
fn test_error_field_path_through_sections() {
    let mut config = Root {
        first: nested("", ""),
        second: nested("", ""),
        boxed: Box::new(Deep::default()),
        ..root()
    };

    let err = config.resolve_paths(&no_home()).unwrap_err();

    match err {
        ResolveError::HomeDirUnavailable { field } => assert_eq!(field, "mount[0].user_path"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_resolvable_fields() {
    assert_eq!(TConfig::resolvable_fields(), ["user_dir", "rel_path"]);
    assert_eq!(
        Root::resolvable_fields(),
        [
            "log_file",
            "first.user_path",
            "first.rel_path",
            "second.user_path",
            "second.rel_path",
            "optional.user_path",
            "optional.rel_path",
            "boxed.path",
            "boxed.inner.user_path",
            "boxed.inner.rel_path",
            "mount.user_path",
            "mount.rel_path",
        ]
    );
}

#[test]
fn test_relative_config_path() {
    let mut config = TConfig {
        user_dir: String::new(),
        rel_path: "files.txt".into(),
    };

    resolve_paths("conf/app.toml", &mut config).unwrap();

    let expected = std::env::current_dir().unwrap().join("conf/files.txt");
    assert_eq!(PathBuf::from(&config.rel_path), expected);
}

#[test]
fn test_empty_config_path() {
    let mut config = TConfig::default();
    let err = resolve_paths("", &mut config).unwrap_err();
    assert!(matches!(err, ResolveError::PathResolution { .. }));
}

#[test]
fn test_with_dir() {
    let r = PathResolver::with_dir("/srv/app/").unwrap();
    assert_eq!(r.config_dir(), Path::new("/srv/app"));
    assert_eq!(r.resolve_str("x").unwrap().as_deref(), Some("/srv/app/x"));
}

#[test]
fn test_root_config_dir() {
    let r = PathResolver::from_config_path("/config.toml").unwrap();
    assert_eq!(r.config_dir(), Path::new("/"));
    assert_eq!(r.resolve_str("./files.txt").unwrap().as_deref(), Some("/files.txt"));
}
