use crate::config::SeqpadConfig;
use crate::model::{PageContext, Template, WrittenPage};
use std::path::PathBuf;

pub mod config;
pub mod context;
pub mod create;
pub mod helpers;
pub mod init;
pub mod journal;
pub mod smart;
pub mod templates;
pub mod update;

/// Where pages, journals and templates live inside a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLayout {
    pub pages_dir: PathBuf,
    pub journals_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub file_ext: String,
}

impl Default for GraphLayout {
    fn default() -> Self {
        SeqpadConfig::default().layout()
    }
}

impl GraphLayout {
    pub fn page_path(&self, title: &str) -> PathBuf {
        self.pages_dir
            .join(format!("{}{}", helpers::sanitize_filename(title), self.file_ext))
    }

    pub fn journal_path(&self, date: &str) -> PathBuf {
        self.journals_dir
            .join(format!("{}{}", helpers::sanitize_filename(date), self.file_ext))
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written: Option<WrittenPage>,
    pub context: Option<PageContext>,
    pub template: Option<Template>,
    pub template_names: Vec<String>,
    pub config: Option<SeqpadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written(mut self, written: WrittenPage) -> Self {
        self.written = Some(written);
        self
    }

    pub fn with_context(mut self, context: PageContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_template_names(mut self, names: Vec<String>) -> Self {
        self.template_names = names;
        self
    }

    pub fn with_config(mut self, config: SeqpadConfig) -> Self {
        self.config = Some(config);
        self
    }
}
