//! Path classification: exclusion rules, gitignore matching, and
//! content-inclusion patterns.
//!
//! Everything here is immutable after construction; both traversal
//! passes consult the same rule sets without sharing mutable state.

use std::collections::HashSet;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;

/// Names excluded from every run unless the caller overrides them.
pub const DEFAULT_EXCLUDES: [&str; 9] = [
    ".git",
    "__pycache__",
    "node_modules",
    ".pytest_cache",
    ".venv",
    "venv",
    ".env",
    ".idea",
    ".vscode",
];

/// Bare names that exclude a path and its entire subtree.
///
/// Membership is checked against path components only, never against
/// full paths, so `node_modules` anywhere in a path's ancestry is
/// enough to drop it.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// The default exclusions plus any caller-supplied names.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> =
            DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<String>())
    }
}

/// Answers "does the root ignore file match this path".
///
/// Built from `<root>/.gitignore` only. A missing or unparseable file
/// yields a predicate that never matches; that case is not an error.
#[derive(Debug)]
pub struct IgnorePredicate {
    matcher: Option<Gitignore>,
}

impl IgnorePredicate {
    /// Load the ignore file at `root/.gitignore`, if present.
    pub fn from_root(root: &Path) -> Self {
        let gitignore_path = root.join(".gitignore");
        if !gitignore_path.exists() {
            return Self { matcher: None };
        }
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&gitignore_path) {
            debug!("ignoring unreadable {}: {}", gitignore_path.display(), err);
            return Self { matcher: None };
        }
        Self {
            matcher: builder.build().ok(),
        }
    }

    /// A predicate that never matches.
    pub fn none() -> Self {
        Self { matcher: None }
    }

    /// Whether the ignore rules match `path` or any of its parents.
    ///
    /// Parent matching matters because a `build/` rule must also hide
    /// `build/output.txt` when exclusion is evaluated per file.
    pub fn is_ignored(&self, path: &Path) -> bool {
        match &self.matcher {
            Some(gitignore) => gitignore
                .matched_path_or_any_parents(path, path.is_dir())
                .is_ignore(),
            None => false,
        }
    }
}

/// Decide whether a path is excluded outright.
///
/// Checks, in order: any ancestor's bare name against the exclusion
/// set, the path's own bare name, then the ignore predicate on the
/// full path. The first hit wins.
pub fn should_exclude(path: &Path, excludes: &ExclusionSet, ignore: &IgnorePredicate) -> bool {
    for ancestor in path.ancestors().skip(1) {
        if let Some(name) = ancestor.file_name().and_then(|n| n.to_str()) {
            if excludes.contains(name) {
                return true;
            }
        }
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if excludes.contains(name) {
            return true;
        }
    }

    ignore.is_ignored(path)
}

/// A single content-inclusion pattern, resolved into its matching form
/// once at parse time instead of re-inspecting the string per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludePattern {
    /// Matches the full path string or the bare file name exactly.
    Exact(String),
    /// `**/`-prefixed: matches the bare file name at any depth.
    AnyDepth(String),
    /// Contains a separator: matches any path ending with the pattern.
    Suffix(String),
}

impl IncludePattern {
    pub fn parse(pattern: &str) -> Self {
        if let Some(name) = pattern.strip_prefix("**/") {
            IncludePattern::AnyDepth(name.to_string())
        } else if pattern.contains('/') {
            IncludePattern::Suffix(pattern.to_string())
        } else {
            IncludePattern::Exact(pattern.to_string())
        }
    }

    fn matches(&self, path_str: &str, name: &str) -> bool {
        match self {
            IncludePattern::Exact(p) => path_str == p || name == p,
            IncludePattern::AnyDepth(n) => name == n,
            IncludePattern::Suffix(s) => path_str.ends_with(s),
        }
    }
}

/// The set of inclusion patterns supplied for a run.
///
/// Used only by content extraction; the tree is unaffected by it.
#[derive(Debug, Clone, Default)]
pub struct IncludePatternSet {
    patterns: Vec<IncludePattern>,
}

impl IncludePatternSet {
    pub fn parse<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| IncludePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches the given file path.
    ///
    /// An empty set matches nothing.
    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.patterns.iter().any(|p| p.matches(&path_str, &name))
    }
}
