//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for page operations, whatever the caller (CLI, tool server,
//! tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store, the graph layout and the graph root
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no page state between calls: every operation
//! reads what it needs from the store.
//!
//! ## Generic Over PageStore
//!
//! `SeqpadApi<S: PageStore>` is generic over the storage backend:
//! - Production: `SeqpadApi<FileStore>`
//! - Testing: `SeqpadApi<InMemoryStore>`

use crate::commands::{self, GraphLayout};
use crate::error::Result;
use crate::store::PageStore;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::smart::SmartPageOptions;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for seqpad operations.
pub struct SeqpadApi<S: PageStore> {
    store: S,
    layout: GraphLayout,
    root: PathBuf,
}

impl<S: PageStore> SeqpadApi<S> {
    pub fn new(store: S, layout: GraphLayout, root: PathBuf) -> Self {
        Self {
            store,
            layout,
            root,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &GraphLayout {
        &self.layout
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.layout)
    }

    pub fn page_context(&self, title: &str) -> Result<CmdResult> {
        commands::context::run(&self.store, &self.layout, title)
    }

    pub fn list_templates(&self) -> Result<CmdResult> {
        commands::templates::list(&self.store, &self.layout)
    }

    pub fn find_template(&self, name: &str) -> Result<CmdResult> {
        commands::templates::show(&self.store, &self.layout, name)
    }

    pub fn create_smart_page(
        &mut self,
        title: &str,
        content: &str,
        options: &SmartPageOptions,
    ) -> Result<CmdResult> {
        commands::smart::run(&mut self.store, &self.layout, title, content, options)
    }

    pub fn create_page(&mut self, title: &str, content: &str, overwrite: bool) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &self.layout, title, content, overwrite)
    }

    pub fn update_page(&mut self, title: &str, content: &str, append: bool) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &self.layout, title, content, append)
    }

    pub fn create_journal_entry(&mut self, content: &str, date: Option<&str>) -> Result<CmdResult> {
        commands::journal::run(&mut self.store, &self.layout, content, date)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.root, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> SeqpadApi<InMemoryStore> {
        SeqpadApi::new(
            InMemoryStore::new(),
            GraphLayout::default(),
            PathBuf::from("/memory"),
        )
    }

    #[test]
    fn dispatches_smart_page_then_context() {
        let mut api = api();
        api.create_smart_page("Project Alpha", "Status update", &SmartPageOptions::default())
            .unwrap();

        let result = api.page_context("Project Alpha").unwrap();
        let context = result.context.unwrap();
        assert_eq!(context.content, "- Status update");
    }

    #[test]
    fn dispatches_create_and_update() {
        let mut api = api();
        api.create_page("Test", "first", false).unwrap();
        api.update_page("Test", "second", true).unwrap();
        assert_eq!(api.store().doc("pages/Test.md"), Some("first\n\nsecond"));
    }

    #[test]
    fn dispatches_journal() {
        let mut api = api();
        let result = api.create_journal_entry("A", Some("2024_01_15")).unwrap();
        assert_eq!(result.written.unwrap().name, "2024_01_15");
    }

    #[test]
    fn dispatches_templates() {
        let mut api = api();
        api.create_page("Weekly", "template:: weekly\n## Wins", false)
            .unwrap();
        assert_eq!(api.list_templates().unwrap().template_names, vec!["Weekly"]);
        assert!(api.find_template("weekly").unwrap().template.is_some());
    }

    #[test]
    fn dispatches_init() {
        let mut api = api();
        api.init().unwrap();
        assert!(api.store().has_dir("journals"));
    }
}
