use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::outline::OutlineItem;

/// Page-level `key:: value` declarations. Keys are unique; the last
/// declaration in a document wins.
pub type Properties = BTreeMap<String, String>;

/// One non-blank line of a page, with its depth inferred from indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub level: usize,
    pub content: String,
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tabs,
    Spaces,
}

/// Everything derivable from a page's text. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageAnalysis {
    pub properties: Properties,
    pub outline: Vec<OutlineNode>,
    pub sections: Vec<String>,
    pub has_todos: bool,
    pub has_tags: bool,
    pub has_links: bool,
    pub has_queries: bool,
    pub indent_style: IndentStyle,
    pub line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateStructure {
    pub properties: Properties,
    pub sections: Vec<String>,
    pub outline: Vec<OutlineNode>,
    pub raw_content: String,
}

/// Where a template was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSource {
    /// A file in the dedicated templates directory.
    TemplatesDir,
    /// A regular page declaring `template::` or `template-name::`.
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateLocation {
    pub path: PathBuf,
    pub source: TemplateSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub location: TemplateLocation,
    pub structure: TemplateStructure,
}

/// Snapshot of an existing page as handed to the dispatch layer.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub title: String,
    pub path: PathBuf,
    pub analysis: PageAnalysis,
    pub tree: Vec<OutlineItem>,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Page,
    Journal,
}

/// Descriptor of a completed write. `name` is the page title, or the date
/// for journals.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenPage {
    pub kind: PageKind,
    pub name: String,
    pub path: PathBuf,
    pub written_at: DateTime<Local>,
    pub was_existing: bool,
    pub used_template: Option<String>,
    pub overwritten: bool,
    pub appended: bool,
}

impl WrittenPage {
    pub fn page(name: impl Into<String>, path: PathBuf, was_existing: bool) -> Self {
        Self {
            kind: PageKind::Page,
            name: name.into(),
            path,
            written_at: Local::now(),
            was_existing,
            used_template: None,
            overwritten: false,
            appended: false,
        }
    }

    pub fn journal(date: impl Into<String>, path: PathBuf, was_existing: bool) -> Self {
        Self {
            kind: PageKind::Journal,
            appended: was_existing,
            ..Self::page(date, path, was_existing)
        }
    }
}
