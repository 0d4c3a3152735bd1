use crate::commands::GraphLayout;
use crate::error::{Result, SeqpadError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "seqpad.json";
const DEFAULT_FILE_EXT: &str = ".md";
const DEFAULT_LOG_LEVEL: &str = "warn";

pub const KEYS: [&str; 5] = [
    "pages-dir",
    "journals-dir",
    "templates-dir",
    "file-ext",
    "log-level",
];

/// Configuration for a graph, stored in `<graph>/seqpad.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeqpadConfig {
    /// Directory holding regular pages, relative to the graph root
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    #[serde(default = "default_journals_dir")]
    pub journals_dir: String,

    /// Directory scanned for dedicated template files
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Extension of page files (e.g. ".md", ".org")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Fallback log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_journals_dir() -> String {
    "journals".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for SeqpadConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            journals_dir: default_journals_dir(),
            templates_dir: default_templates_dir(),
            file_ext: default_file_ext(),
            log_level: default_log_level(),
        }
    }
}

impl SeqpadConfig {
    /// Load config from the given graph root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(graph_root: P) -> Result<Self> {
        let config_path = graph_root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SeqpadError::Io)?;
        let config: SeqpadConfig =
            serde_json::from_str(&content).map_err(SeqpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given graph root
    pub fn save<P: AsRef<Path>>(&self, graph_root: P) -> Result<()> {
        let graph_root = graph_root.as_ref();

        if !graph_root.exists() {
            fs::create_dir_all(graph_root).map_err(SeqpadError::Io)?;
        }

        let config_path = graph_root.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SeqpadError::Serialization)?;
        fs::write(config_path, content).map_err(SeqpadError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "pages-dir" => Some(self.pages_dir.clone()),
            "journals-dir" => Some(self.journals_dir.clone()),
            "templates-dir" => Some(self.templates_dir.clone()),
            "file-ext" => Some(self.file_ext.clone()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "pages-dir" | "journals-dir" | "templates-dir" if value.is_empty() => Err(
                SeqpadError::Config(format!("{} cannot be empty", key)),
            ),
            "pages-dir" => {
                self.pages_dir = value.to_string();
                Ok(())
            }
            "journals-dir" => {
                self.journals_dir = value.to_string();
                Ok(())
            }
            "templates-dir" => {
                self.templates_dir = value.to_string();
                Ok(())
            }
            "file-ext" => {
                self.set_file_ext(value);
                Ok(())
            }
            "log-level" => {
                LevelFilter::from_str(value)
                    .map_err(|_| SeqpadError::Config(format!("Invalid log level: {}", value)))?;
                self.log_level = value.to_lowercase();
                Ok(())
            }
            other => Err(SeqpadError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    pub fn layout(&self) -> GraphLayout {
        GraphLayout {
            pages_dir: PathBuf::from(&self.pages_dir),
            journals_dir: PathBuf::from(&self.journals_dir),
            templates_dir: PathBuf::from(&self.templates_dir),
            file_ext: self.file_ext.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SeqpadConfig::default();
        assert_eq!(config.file_ext, ".md");
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.layout(), GraphLayout::default());
    }

    #[test]
    fn test_set_file_ext_without_dot() {
        let mut config = SeqpadConfig::default();
        config.set("file-ext", "org").unwrap();
        assert_eq!(config.file_ext, ".org");
        assert_eq!(config.get("file-ext").as_deref(), Some(".org"));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_level() {
        let mut config = SeqpadConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("pages-dir", "  ").is_err());
        config.set("log-level", "DEBUG").unwrap();
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempdir().unwrap();
        let config = SeqpadConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SeqpadConfig::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let mut config = SeqpadConfig::default();
        config.set("journals-dir", "daily").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = SeqpadConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.journals_dir, "daily");
        assert_eq!(loaded.layout().journals_dir, PathBuf::from("daily"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"file_ext": ".txt"}"#,
        )
        .unwrap();
        let loaded = SeqpadConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.file_ext, ".txt");
        assert_eq!(loaded.templates_dir, "templates");
    }
}
