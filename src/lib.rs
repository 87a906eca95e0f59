//! Repodump - flatten a repository into one annotated text document.
//!
//! Repodump walks a directory tree, renders the surviving entries as
//! an indented text tree, and optionally concatenates the contents of
//! selected files, producing a single flat document suitable for
//! feeding a codebase to an analysis pipeline.
//!
//! # Quick Start
//!
//! ```no_run
//! use repodump::Dump;
//!
//! let document = Dump::new("./my-project")
//!     .exclude(["target"])
//!     .include_content(["**/README.md"])
//!     .build()
//!     .unwrap();
//!
//! println!("{}", document.to_text());
//! ```
//!
//! # Modules
//!
//! - [`filter`] - Exclusion rules, gitignore matching, inclusion patterns
//! - [`tree`] - Indented tree rendering
//! - [`contents`] - File content extraction
//! - [`output`] - Document assembly and writing
//! - [`builder`] - Fluent API tying the pieces together

pub mod builder;
pub mod contents;
pub mod errors;
pub mod filter;
pub mod output;
pub mod tree;

// Re-export key types at crate root for convenience
pub use builder::{dump_tree, Dump};
pub use contents::extract_contents;
pub use errors::{exit_code, DumpError, WalkError};
pub use filter::{
    should_exclude, ExclusionSet, IgnorePredicate, IncludePattern, IncludePatternSet,
    DEFAULT_EXCLUDES,
};
pub use output::{write_document, DumpDocument, OutputFormat};
pub use tree::render_tree;
