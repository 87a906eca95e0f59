//! Directory tree rendering with box-drawing characters.
//!
//! Produces one indented line per surviving entry. Excluded
//! directories are pruned outright: no descendant of an excluded path
//! is ever visited.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::WalkError;
use crate::filter::{should_exclude, ExclusionSet, IgnorePredicate};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Render the subtree under `path` as indented text lines.
///
/// The root is treated as the last entry of its (absent) sibling list,
/// so it always gets the corner connector. The root is subject to the
/// same exclusion check as any descendant; an excluded root yields an
/// empty sequence.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use repodump::filter::{ExclusionSet, IgnorePredicate};
/// use repodump::tree::render_tree;
///
/// let root = Path::new("./project");
/// let excludes = ExclusionSet::default();
/// let ignore = IgnorePredicate::from_root(root);
/// for line in render_tree(root, &excludes, &ignore).unwrap() {
///     println!("{line}");
/// }
/// ```
pub fn render_tree(
    path: &Path,
    excludes: &ExclusionSet,
    ignore: &IgnorePredicate,
) -> Result<Vec<String>, WalkError> {
    if !path.exists() {
        return Err(WalkError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut lines = Vec::new();
    render_node(path, excludes, ignore, "", true, &mut lines)?;
    Ok(lines)
}

fn render_node(
    path: &Path,
    excludes: &ExclusionSet,
    ignore: &IgnorePredicate,
    prefix: &str,
    is_last: bool,
    lines: &mut Vec<String>,
) -> Result<(), WalkError> {
    if should_exclude(path, excludes, ignore) {
        debug!("pruned: {}", path.display());
        return Ok(());
    }

    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    lines.push(format!("{prefix}{connector}{}", bare_name(path)));

    if path.is_dir() {
        let continuation = if is_last { SPACE } else { VERTICAL };
        let child_prefix = format!("{prefix}{continuation}");

        let children = sorted_children(path)?;
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            // Lastness is decided against the full sorted sibling
            // list, before exclusion filtering: a surviving entry
            // followed only by excluded siblings keeps the tee.
            render_node(child, excludes, ignore, &child_prefix, i == count - 1, lines)?;
        }
    }

    Ok(())
}

/// Directory entries sorted directories-first, then by name.
fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
    let entries = fs::read_dir(dir).map_err(|e| WalkError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WalkError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        children.push(entry.path());
    }

    children.sort_by_key(|p| (p.is_file(), p.file_name().map(|n| n.to_os_string())));
    Ok(children)
}

/// The final path component, falling back to the full path string for
/// roots like `.` or `/` that have none.
fn bare_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |n| n.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn render(dir: &TempDir, extra: &[&str]) -> Vec<String> {
        let excludes = ExclusionSet::with_extra(extra.iter().copied());
        let ignore = IgnorePredicate::from_root(dir.path());
        render_tree(dir.path(), &excludes, &ignore).unwrap()
    }

    #[test]
    fn test_root_uses_corner_connector() {
        let dir = TempDir::new().unwrap();
        let lines = render(&dir, &[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("└── "));
    }

    #[test]
    fn test_directories_sort_before_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();

        let lines = render(&dir, &[]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "    ├── b");
        assert_eq!(lines[2], "    └── a.txt");
    }

    #[test]
    fn test_files_sort_alphabetically() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("z.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("m.txt"), "").unwrap();

        let lines = render(&dir, &[]);
        assert_eq!(lines[1], "    ├── a.txt");
        assert_eq!(lines[2], "    ├── m.txt");
        assert_eq!(lines[3], "    └── z.txt");
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/config"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let lines = render(&dir, &[]);
        assert!(!lines.iter().any(|l| l.contains(".git")));
        assert!(!lines.iter().any(|l| l.contains("config")));
        assert!(lines.iter().any(|l| l.contains("a.txt")));
    }

    #[test]
    fn test_excluded_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let root_name = dir.path().file_name().unwrap().to_str().unwrap().to_string();
        let excludes = ExclusionSet::with_extra([root_name]);
        let ignore = IgnorePredicate::none();
        let lines = render_tree(dir.path(), &excludes, &ignore).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_connector_reflects_prefilter_sibling_position() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("zzz.txt"), "").unwrap();

        // zzz.txt sorts last and is excluded, so a.txt is the final
        // rendered entry but still gets the tee connector.
        let lines = render(&dir, &["zzz.txt"]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "    ├── a.txt");
    }

    #[test]
    fn test_nested_prefixes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "").unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();

        let lines = render(&dir, &[]);
        assert_eq!(lines[1], "    ├── src");
        assert_eq!(lines[2], "    │   └── main.rs");
        assert_eq!(lines[3], "    └── Cargo.toml");
    }

    #[test]
    fn test_gitignore_rules_prune_subtree() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/out.txt"), "").unwrap();
        fs::write(dir.path().join("keep.txt"), "").unwrap();

        let lines = render(&dir, &[]);
        assert!(!lines.iter().any(|l| l.contains("build")));
        assert!(!lines.iter().any(|l| l.contains("out.txt")));
        assert!(lines.iter().any(|l| l.contains("keep.txt")));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let result = render_tree(
            Path::new("/nonexistent/repodump-test"),
            &ExclusionSet::default(),
            &IgnorePredicate::none(),
        );
        assert!(matches!(result, Err(WalkError::NotFound { .. })));
    }

    #[test]
    fn test_single_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("only.txt");
        fs::write(&file, "").unwrap();

        let lines = render_tree(&file, &ExclusionSet::default(), &IgnorePredicate::none()).unwrap();
        assert_eq!(lines, vec!["└── only.txt".to_string()]);
    }
}
