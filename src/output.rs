//! Document assembly and output writing.
//!
//! Joins the tree and content sections into the final flat document
//! and persists it, in plain text or JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::errors::DumpError;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Flat text document (default).
    #[default]
    Text,
    /// JSON for programmatic access.
    Json,
}

/// The assembled dump of one repository.
///
/// `contents` is `None` when no inclusion patterns were supplied; the
/// content section (headers included) is omitted entirely in that
/// case. Patterns that matched nothing still produce `Some` with an
/// empty line list, and the section headers still appear.
#[derive(Debug, Clone, Serialize)]
pub struct DumpDocument {
    pub tree: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

impl DumpDocument {
    /// Render the document as flat text, sections joined by single
    /// newlines and no trailing newline.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(
            self.tree.len() + self.contents.as_ref().map_or(0, |c| c.len()) + 5,
        );

        lines.push("Directory Structure:");
        lines.push("-------------------");
        lines.extend(self.tree.iter().map(String::as_str));

        if let Some(contents) = &self.contents {
            lines.push("");
            lines.push("File Contents:");
            lines.push("-------------");
            lines.extend(contents.iter().map(String::as_str));
        }

        lines.join("\n")
    }

    /// Render the document in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, DumpError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Write the rendered document to `path`.
///
/// All computed output is discarded on failure; this is the one error
/// that terminates a run.
pub fn write_document(
    document: &DumpDocument,
    path: &Path,
    format: OutputFormat,
) -> Result<(), DumpError> {
    let rendered = document.render(format)?;
    fs::write(path, rendered).map_err(|e| DumpError::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    })
}
