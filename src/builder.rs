//! Fluent builder API for repodump.
//!
//! Ties the classifier, tree renderer, and content extractor together
//! behind one configuration seam, so the engine is usable without the
//! CLI.

use std::path::{Path, PathBuf};

use crate::contents::extract_contents;
use crate::errors::DumpError;
use crate::filter::{ExclusionSet, IgnorePredicate, IncludePatternSet};
use crate::output::DumpDocument;
use crate::tree::render_tree;

/// Builder for dumping a repository.
///
/// # Examples
///
/// ```no_run
/// use repodump::Dump;
///
/// let document = Dump::new("./project")
///     .exclude(["target"])
///     .include_content(["**/README.md", "src/main.rs"])
///     .build()
///     .unwrap();
///
/// println!("{}", document.to_text());
/// ```
pub struct Dump {
    root: PathBuf,
    exclude: Vec<String>,
    include_content: Vec<String>,
}

impl Dump {
    /// Create a new builder for the given root path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
            include_content: Vec::new(),
        }
    }

    /// Add bare names to the exclusion set, on top of the defaults.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add inclusion patterns for content extraction. With no patterns
    /// the document carries the tree only.
    pub fn include_content<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_content
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Walk the repository and assemble the document.
    ///
    /// Rule sets are built once here; the two traversals share them by
    /// reference and run independently over the same root.
    pub fn build(self) -> Result<DumpDocument, DumpError> {
        if !self.root.exists() {
            return Err(DumpError::PathNotFound(self.root));
        }

        let excludes = ExclusionSet::with_extra(self.exclude);
        let ignore = IgnorePredicate::from_root(&self.root);
        let includes = IncludePatternSet::parse(&self.include_content);

        let tree = render_tree(&self.root, &excludes, &ignore)?;

        let contents = if includes.is_empty() {
            None
        } else {
            Some(extract_contents(&self.root, &includes, &excludes, &ignore)?)
        };

        Ok(DumpDocument { tree, contents })
    }
}

/// Dump a path with default exclusions and no content patterns.
pub fn dump_tree(root: impl AsRef<Path>) -> Result<DumpDocument, DumpError> {
    Dump::new(root.as_ref()).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("README.md"), "# test\n").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref\n").unwrap();

        dir
    }

    #[test]
    fn test_build_tree_only() {
        let dir = create_test_repo();

        let doc = Dump::new(dir.path()).build().unwrap();
        assert!(doc.contents.is_none());
        assert!(doc.tree.iter().any(|l| l.contains("main.rs")));
        assert!(!doc.tree.iter().any(|l| l.contains(".git")));
    }

    #[test]
    fn test_build_with_content_patterns() {
        let dir = create_test_repo();

        let doc = Dump::new(dir.path())
            .include_content(["README.md"])
            .build()
            .unwrap();

        let contents = doc.contents.unwrap();
        assert!(contents.iter().any(|l| l.starts_with("File: ")));
        assert!(contents.iter().any(|l| l == "# test"));
    }

    #[test]
    fn test_extra_excludes_apply_to_both_passes() {
        let dir = create_test_repo();

        let doc = Dump::new(dir.path())
            .exclude(["src"])
            .include_content(["**/main.rs"])
            .build()
            .unwrap();

        assert!(!doc.tree.iter().any(|l| l.contains("src")));
        assert!(doc.contents.unwrap().is_empty());
    }

    #[test]
    fn test_missing_root() {
        let result = Dump::new("/nonexistent/repodump-test").build();
        assert!(matches!(result, Err(DumpError::PathNotFound(_))));
    }

    #[test]
    fn test_dump_tree_helper() {
        let dir = create_test_repo();
        let doc = dump_tree(dir.path()).unwrap();
        assert!(!doc.tree.is_empty());
    }
}
