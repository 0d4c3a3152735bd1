use super::PageStore;
use crate::error::{Result, SeqpadError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn create_dirs(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SeqpadError::Io)?;
        }
        Ok(())
    }
}

impl PageStore for FileStore {
    fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        let full = self.resolve(path);
        if !full.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(full).map_err(SeqpadError::Io)?;
        Ok(Some(content))
    }

    fn write_text(&mut self, path: &Path, text: &str) -> Result<()> {
        let target = self.resolve(path);
        let parent = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Self::create_dirs(&parent)?;

        // Atomic write
        let tmp_path = parent.join(format!(".seqpad-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, text).map_err(SeqpadError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SeqpadError::Io(e));
        }

        Ok(())
    }

    fn list_entries(&self, dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        let full_dir = self.resolve(dir);
        if !full_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&full_dir).map_err(SeqpadError::Io)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("[store] skipping entry in {}: {}", full_dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if name.ends_with(suffix) {
                    entries.push(dir.join(name));
                }
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.resolve(path)
    }

    fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
        Self::create_dirs(&self.resolve(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn reads_missing_file_as_none() {
        let (_dir, store) = setup();
        assert_eq!(store.read_text(Path::new("pages/nope.md")).unwrap(), None);
    }

    #[test]
    fn write_creates_parents_and_overwrites() {
        let (dir, mut store) = setup();
        let path = Path::new("pages/deep/Page.md");
        store.write_text(path, "first").unwrap();
        store.write_text(path, "second").unwrap();

        let on_disk = fs::read_to_string(dir.path().join(path)).unwrap();
        assert_eq!(on_disk, "second");
        assert_eq!(store.read_text(path).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let (dir, mut store) = setup();
        store.write_text(Path::new("pages/A.md"), "a").unwrap();

        for entry in fs::read_dir(dir.path().join("pages")).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn lists_entries_sorted_and_filtered() {
        let (_dir, mut store) = setup();
        store.write_text(Path::new("pages/b.md"), "").unwrap();
        store.write_text(Path::new("pages/a.md"), "").unwrap();
        store.write_text(Path::new("pages/c.txt"), "").unwrap();
        store.write_text(Path::new("pages/sub/d.md"), "").unwrap();

        let entries = store.list_entries(Path::new("pages"), ".md").unwrap();
        assert_eq!(
            entries,
            vec![PathBuf::from("pages/a.md"), PathBuf::from("pages/b.md")]
        );
    }

    #[test]
    fn lists_dot_titled_pages() {
        let (dir, mut store) = setup();
        store.write_text(Path::new("pages/.hidden plan.md"), "x").unwrap();
        fs::write(dir.path().join("pages/.seqpad-stale.tmp"), "junk").unwrap();

        let entries = store.list_entries(Path::new("pages"), ".md").unwrap();
        assert_eq!(entries, vec![PathBuf::from("pages/.hidden plan.md")]);
    }

    #[test]
    fn lists_missing_dir_as_empty() {
        let (_dir, store) = setup();
        assert!(store.list_entries(Path::new("templates"), ".md").unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let (dir, store) = setup();
        fs::create_dir_all(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("pages/bin.md"), [0xff, 0xfe, 0x00]).unwrap();

        let err = store.read_text(Path::new("pages/bin.md")).unwrap_err();
        assert!(matches!(err, SeqpadError::Io(_)));
    }

    #[test]
    fn root_existence() {
        let (dir, store) = setup();
        assert!(store.root_exists());
        let missing = FileStore::new(dir.path().join("missing"));
        assert!(!missing.root_exists());
    }
}
