use super::PageStore;
use crate::error::{Result, SeqpadError};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};

const VIRTUAL_ROOT: &str = "/memory";

/// In-memory page storage for testing.
pub struct InMemoryStore {
    docs: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    root_exists: bool,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            docs: BTreeMap::new(),
            dirs: BTreeSet::new(),
            unreadable: HashSet::new(),
            root_exists: true,
            simulate_write_error: false,
        }
    }

    /// Seed a document without going through `write_text`.
    pub fn with_doc(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.docs.insert(path.into(), text.into());
        self
    }

    /// Pretend the graph root directory is gone.
    pub fn without_root(mut self) -> Self {
        self.root_exists = false;
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Make reads of `path` fail with an I/O error.
    pub fn mark_unreadable(&mut self, path: impl Into<PathBuf>) {
        self.unreadable.insert(path.into());
    }

    pub fn doc(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.docs.get(path.as_ref()).map(String::as_str)
    }

    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.contains(dir.as_ref())
    }
}

impl PageStore for InMemoryStore {
    fn root_exists(&self) -> bool {
        self.root_exists
    }

    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        if self.unreadable.contains(path) {
            return Err(SeqpadError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("simulated read failure: {}", path.display()),
            )));
        }
        Ok(self.docs.get(path).cloned())
    }

    fn write_text(&mut self, path: &Path, text: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(SeqpadError::Io(io::Error::other("Simulated write error")));
        }
        if let Some(parent) = path.parent() {
            self.dirs.insert(parent.to_path_buf());
        }
        self.docs.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn list_entries(&self, dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .docs
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix))
            })
            .cloned()
            .collect())
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        Path::new(VIRTUAL_ROOT).join(path)
    }

    fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
        if self.simulate_write_error {
            return Err(SeqpadError::Io(io::Error::other("Simulated write error")));
        }
        self.dirs.insert(dir.to_path_buf());
        self.root_exists = true;
        Ok(())
    }
}
