//! Template- and structure-aware page creation.
//!
//! Decision order for a request:
//!
//! 1. Page exists and `overwrite` is off: append. With `preserve_structure`
//!    the new content is bulleted first; without it, it is appended verbatim.
//!    Both use [`AppendStrategy::BlankLine`].
//! 2. A template was requested: merge the content into the template skeleton.
//!    An unknown template silently falls back to plain outline formatting;
//!    only a debug log records it.
//! 3. Otherwise: plain outline formatting.
//!
//! The result is then written over whatever the page held before.

use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::format::{format_as_outline, merge_with_template, AppendStrategy};
use crate::model::WrittenPage;
use crate::parser::analyze_page;
use crate::store::PageStore;
use crate::templates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartPageOptions {
    pub template: Option<String>,
    pub preserve_structure: bool,
    pub overwrite: bool,
}

impl Default for SmartPageOptions {
    fn default() -> Self {
        Self {
            template: None,
            preserve_structure: true,
            overwrite: false,
        }
    }
}

impl SmartPageOptions {
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }
}

pub fn run<S: PageStore>(
    store: &mut S,
    layout: &GraphLayout,
    title: &str,
    content: &str,
    options: &SmartPageOptions,
) -> Result<CmdResult> {
    let path = layout.page_path(title);
    let existing = store.read_text(&path)?;
    let was_existing = existing.is_some();
    let mut used_template = None;
    let mut result = CmdResult::default();

    let final_text = match existing {
        Some(existing) if !options.overwrite => {
            if options.preserve_structure {
                let analysis = analyze_page(&existing);
                log::debug!(
                    "[smart] appending to {} ({} lines, {:?} indentation)",
                    path.display(),
                    analysis.line_count,
                    analysis.indent_style
                );
                AppendStrategy::BlankLine.join(&existing, &format_as_outline(content))
            } else {
                AppendStrategy::BlankLine.join(&existing, content)
            }
        }
        _ => match options.template.as_deref() {
            Some(name) => {
                let index = templates::find_templates(store, layout)?;
                match templates::resolve(store, &index, name)? {
                    Some(template) => {
                        used_template = Some(template.name.clone());
                        merge_with_template(&template.structure, content)
                    }
                    None => {
                        log::debug!("[smart] template {} not found, using plain outline", name);
                        format_as_outline(content)
                    }
                }
            }
            None => format_as_outline(content),
        },
    };

    store.write_text(&path, &final_text)?;
    log::info!("[smart] wrote {}", path.display());

    let mut written = WrittenPage::page(title, store.full_path(&path), was_existing);
    written.overwritten = options.overwrite;
    written.appended = was_existing && !options.overwrite;
    written.used_template = used_template;

    let verb = if written.appended {
        "Page updated"
    } else if was_existing {
        "Page replaced"
    } else {
        "Page created"
    };
    let message = match &written.used_template {
        Some(template) => format!("{}: {} (template: {})", verb, title, template),
        None => format!("{}: {}", verb, title),
    };
    result.add_message(CmdMessage::success(message));

    Ok(result.with_written(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::Path;

    fn layout() -> GraphLayout {
        GraphLayout::default()
    }

    fn doc<'a>(store: &'a InMemoryStore, title: &str) -> &'a str {
        store.doc(layout().page_path(title)).unwrap()
    }

    #[test]
    fn new_page_without_template_is_bulleted() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            &layout(),
            "Project Alpha",
            "Status update",
            &SmartPageOptions::default(),
        )
        .unwrap();

        assert_eq!(doc(&store, "Project Alpha"), "- Status update");
        let written = result.written.unwrap();
        assert!(!written.was_existing);
        assert!(!written.appended);
        assert_eq!(written.used_template, None);
        assert_eq!(written.path, Path::new("/memory/pages/Project Alpha.md"));
    }

    #[test]
    fn existing_page_gets_formatted_append() {
        let mut store = InMemoryStore::new().with_doc("pages/Log.md", "- old line");
        let result = run(
            &mut store,
            &layout(),
            "Log",
            "new line",
            &SmartPageOptions::default(),
        )
        .unwrap();

        assert_eq!(doc(&store, "Log"), "- old line\n\n- new line");
        let written = result.written.unwrap();
        assert!(written.was_existing);
        assert!(written.appended);
        assert!(!written.overwritten);
    }

    #[test]
    fn existing_page_raw_append() {
        let mut store = InMemoryStore::new().with_doc("pages/Log.md", "- old line");
        let options = SmartPageOptions {
            preserve_structure: false,
            ..SmartPageOptions::default()
        };
        run(&mut store, &layout(), "Log", "new line", &options).unwrap();

        assert_eq!(doc(&store, "Log"), "- old line\n\nnew line");
    }

    #[test]
    fn template_is_ignored_when_appending() {
        let mut store = InMemoryStore::new()
            .with_doc("templates/meeting.md", "type:: meeting\n## Agenda")
            .with_doc("pages/Sync.md", "- earlier");
        let options = SmartPageOptions::default().with_template("meeting");
        let result = run(&mut store, &layout(), "Sync", "later", &options).unwrap();

        assert_eq!(doc(&store, "Sync"), "- earlier\n\n- later");
        assert_eq!(result.written.unwrap().used_template, None);
    }

    #[test]
    fn new_page_from_template() {
        let mut store =
            InMemoryStore::new().with_doc("templates/meeting.md", "type:: meeting\n\n## Agenda\n");
        let options = SmartPageOptions::default().with_template("meeting");
        let result = run(&mut store, &layout(), "New", "discuss budget", &options).unwrap();

        let text = doc(&store, "New");
        assert!(text.starts_with("type:: meeting\n\n## Agenda\n\n"));
        assert!(text.ends_with("- discuss budget"));
        assert_eq!(result.written.unwrap().used_template.as_deref(), Some("meeting"));
    }

    #[test]
    fn template_name_is_resolved_case_insensitively() {
        let mut store = InMemoryStore::new().with_doc("templates/Meeting.md", "## Agenda");
        let options = SmartPageOptions::default().with_template("meeting");
        let result = run(&mut store, &layout(), "New", "x", &options).unwrap();

        assert_eq!(doc(&store, "New"), "## Agenda\n\n- x");
        assert_eq!(result.written.unwrap().used_template.as_deref(), Some("Meeting"));
    }

    #[test]
    fn missing_template_falls_back_to_outline() {
        let mut store = InMemoryStore::new();
        let options = SmartPageOptions::default().with_template("nope");
        let result = run(&mut store, &layout(), "New", "plain", &options).unwrap();

        assert_eq!(doc(&store, "New"), "- plain");
        assert_eq!(result.written.as_ref().unwrap().used_template, None);
        assert!(result
            .messages
            .iter()
            .all(|m| matches!(m.level, crate::commands::MessageLevel::Success)));
    }

    #[test]
    fn overwrite_replaces_existing_page_with_template() {
        let mut store = InMemoryStore::new()
            .with_doc("templates/meeting.md", "type:: meeting")
            .with_doc("pages/Sync.md", "- stale");
        let options = SmartPageOptions {
            overwrite: true,
            ..SmartPageOptions::default().with_template("meeting")
        };
        let result = run(&mut store, &layout(), "Sync", "fresh", &options).unwrap();

        assert_eq!(doc(&store, "Sync"), "type:: meeting\n\n- fresh");
        let written = result.written.unwrap();
        assert!(written.was_existing);
        assert!(written.overwritten);
        assert!(!written.appended);
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = run(
            &mut store,
            &layout(),
            "New",
            "x",
            &SmartPageOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::SeqpadError::Io(_)));
    }
}
