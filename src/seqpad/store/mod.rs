//! # Storage Layer
//!
//! The [`PageStore`] trait is the only way the rest of seqpad touches page
//! text. Every operation reads a page whole, transforms it, and writes it back
//! whole; there is no caching, locking or partial write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage rooted at a graph directory
//!   - Writes go to a temp file that is renamed over the target
//!   - Missing parent directories are created on write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures and unreadable entries
//!
//! ## Paths
//!
//! All paths handed to a store are relative to the graph root:
//!
//! ```text
//! <graph>/
//! ├── pages/            # one markdown file per page
//! ├── journals/         # one markdown file per day (YYYY_MM_DD.md)
//! ├── templates/        # dedicated template files
//! └── seqpad.json       # configuration
//! ```
//!
//! Two operations on the same page at the same time will race: both read the
//! same text and the last full write wins.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for whole-document page storage.
pub trait PageStore {
    /// Whether the graph root itself is present.
    fn root_exists(&self) -> bool;

    /// Read a document.
    /// Returns Ok(None) if it does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure, bad encoding).
    fn read_text(&self, path: &Path) -> Result<Option<String>>;

    /// Replace a document, creating missing parent directories.
    fn write_text(&mut self, path: &Path, text: &str) -> Result<()>;

    /// Documents directly inside `dir` whose file name ends with `suffix`, sorted.
    /// A missing `dir` yields an empty list.
    fn list_entries(&self, dir: &Path, suffix: &str) -> Result<Vec<PathBuf>>;

    /// Location of `path` as shown to users.
    fn full_path(&self, path: &Path) -> PathBuf;

    /// Create a directory (and its parents) if missing.
    fn ensure_dir(&mut self, dir: &Path) -> Result<()>;
}
