//! Content extraction for matched files.
//!
//! A second, independently-shaped traversal from the tree renderer:
//! every directory is descended in plain alphabetical order and
//! exclusion is evaluated per file. The ancestor-name check in the
//! classifier still keeps files under excluded directories out of the
//! output, so the two walks agree on what survives.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::WalkError;
use crate::filter::{should_exclude, ExclusionSet, IgnorePredicate, IncludePatternSet};

/// Collect the text content of every file matching the inclusion
/// patterns under `path`, as a flat sequence of output lines.
///
/// Each matched file contributes a blank line, a `File:` header, a
/// `=` separator sized to the header, a blank line, then its lines
/// verbatim. A file that cannot be read as text contributes a single
/// `Error reading file:` line instead; the run continues.
pub fn extract_contents(
    path: &Path,
    includes: &IncludePatternSet,
    excludes: &ExclusionSet,
    ignore: &IgnorePredicate,
) -> Result<Vec<String>, WalkError> {
    let mut lines = Vec::new();
    extract_into(path, includes, excludes, ignore, &mut lines)?;
    Ok(lines)
}

fn extract_into(
    path: &Path,
    includes: &IncludePatternSet,
    excludes: &ExclusionSet,
    ignore: &IgnorePredicate,
    lines: &mut Vec<String>,
) -> Result<(), WalkError> {
    if path.is_file() {
        if includes.matches(path) && !should_exclude(path, excludes, ignore) {
            append_file_block(path, lines);
        }
    } else if path.is_dir() {
        for child in sorted_entries(path)? {
            extract_into(&child, includes, excludes, ignore, lines)?;
        }
    }
    Ok(())
}

fn append_file_block(path: &Path, lines: &mut Vec<String>) {
    let path_str = path.to_string_lossy();
    lines.push(String::new());
    lines.push(format!("File: {path_str}"));
    lines.push("=".repeat(path_str.chars().count() + 6));
    lines.push(String::new());

    match fs::read_to_string(path) {
        Ok(content) => lines.extend(content.lines().map(str::to_owned)),
        Err(err) => {
            debug!("unreadable file {}: {}", path.display(), err);
            lines.push(format!("Error reading file: {err}"));
        }
    }
}

/// Directory entries in plain alphabetical order, files and
/// directories interleaved.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
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

    children.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(children)
}
