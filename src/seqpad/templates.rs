//! # Template Registry
//!
//! Templates come from two places:
//!
//! 1. every file in the templates directory, named by file stem,
//! 2. every page whose text contains `template::` or `template-name::`
//!    (case-insensitive), also named by file stem.
//!
//! When both sources provide the same name, the page wins. Discovery is a
//! best-effort scan: a file that cannot be read is skipped, never fatal.
//!
//! Names are kept sorted, so case-insensitive resolution is deterministic
//! regardless of the order the filesystem lists entries in.

use std::collections::BTreeMap;
use std::path::Path;

use crate::commands::GraphLayout;
use crate::error::Result;
use crate::model::{Template, TemplateLocation, TemplateSource};
use crate::parser::extract_template_structure;
use crate::store::PageStore;

const PAGE_TEMPLATE_MARKERS: [&str; 2] = ["template::", "template-name::"];

pub type TemplateIndex = BTreeMap<String, TemplateLocation>;

/// Discovers every template candidate in the graph.
pub fn find_templates<S: PageStore>(store: &S, layout: &GraphLayout) -> Result<TemplateIndex> {
    let mut templates = TemplateIndex::new();

    for path in store.list_entries(&layout.templates_dir, &layout.file_ext)? {
        if let Some(name) = stem(&path) {
            templates.insert(
                name,
                TemplateLocation {
                    path,
                    source: TemplateSource::TemplatesDir,
                },
            );
        }
    }

    for path in store.list_entries(&layout.pages_dir, &layout.file_ext)? {
        let content = match store.read_text(&path) {
            Ok(Some(content)) => content,
            Ok(None) => continue,
            Err(e) => {
                log::debug!("[templates] skipping unreadable page {}: {}", path.display(), e);
                continue;
            }
        };
        if !declares_template(&content) {
            continue;
        }
        if let Some(name) = stem(&path) {
            templates.insert(
                name,
                TemplateLocation {
                    path,
                    source: TemplateSource::Page,
                },
            );
        }
    }

    log::debug!("[templates] discovered {} templates", templates.len());
    Ok(templates)
}

fn declares_template(content: &str) -> bool {
    let lower = content.to_lowercase();
    PAGE_TEMPLATE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

/// Picks the entry for `name`: exact match first, then the first
/// case-insensitive match in sorted name order.
pub fn resolve_name<'a>(
    templates: &'a TemplateIndex,
    name: &str,
) -> Option<(&'a String, &'a TemplateLocation)> {
    templates.get_key_value(name).or_else(|| {
        let wanted = name.to_lowercase();
        templates
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
    })
}

/// Resolves `name` and loads the template's structure.
///
/// An absent template is `Ok(None)`. A template that vanished between
/// discovery and loading is also treated as absent; read failures propagate.
pub fn resolve<S: PageStore>(
    store: &S,
    templates: &TemplateIndex,
    name: &str,
) -> Result<Option<Template>> {
    let Some((resolved, location)) = resolve_name(templates, name) else {
        return Ok(None);
    };
    let Some(content) = store.read_text(&location.path)? else {
        return Ok(None);
    };

    Ok(Some(Template {
        name: resolved.clone(),
        location: TemplateLocation {
            path: store.full_path(&location.path),
            source: location.source,
        },
        structure: extract_template_structure(&content),
    }))
}

pub fn template_names(templates: &TemplateIndex) -> Vec<String> {
    templates.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_doc("templates/meeting.md", "type:: meeting\n\n## Agenda\n")
            .with_doc("templates/Project.md", "type:: project")
            .with_doc("pages/Weekly.md", "Template:: weekly\n## Wins")
            .with_doc("pages/Named.md", "template-name:: named")
            .with_doc("pages/Plain.md", "- nothing to see")
    }

    #[test]
    fn discovers_both_sources() {
        let index = find_templates(&store(), &GraphLayout::default()).unwrap();
        let names = template_names(&index);
        assert_eq!(names, vec!["Named", "Project", "Weekly", "meeting"]);
        assert_eq!(index["meeting"].source, TemplateSource::TemplatesDir);
        assert_eq!(index["Weekly"].source, TemplateSource::Page);
    }

    #[test]
    fn page_source_overrides_templates_dir() {
        let store = InMemoryStore::new()
            .with_doc("templates/meeting.md", "type:: meeting")
            .with_doc("pages/meeting.md", "template:: meeting\ntype:: page-meeting");
        let index = find_templates(&store, &GraphLayout::default()).unwrap();
        assert_eq!(index["meeting"].path, PathBuf::from("pages/meeting.md"));
        assert_eq!(index["meeting"].source, TemplateSource::Page);
    }

    #[test]
    fn unreadable_pages_are_skipped() {
        let mut store = store();
        store.mark_unreadable("pages/Weekly.md");
        let index = find_templates(&store, &GraphLayout::default()).unwrap();
        assert!(!index.contains_key("Weekly"));
        assert!(index.contains_key("Named"));
    }

    #[test]
    fn resolves_exact_before_case_insensitive() {
        let store = InMemoryStore::new()
            .with_doc("templates/Meeting.md", "type:: upper")
            .with_doc("templates/meeting.md", "type:: lower");
        let index = find_templates(&store, &GraphLayout::default()).unwrap();

        let exact = resolve(&store, &index, "meeting").unwrap().unwrap();
        assert_eq!(exact.structure.properties["type"], "lower");

        let fallback = resolve(&store, &index, "MEETING").unwrap().unwrap();
        assert_eq!(fallback.name, "Meeting");
        assert_eq!(fallback.structure.properties["type"], "upper");
    }

    #[test]
    fn resolves_case_insensitively() {
        let store = store();
        let index = find_templates(&store, &GraphLayout::default()).unwrap();
        let template = resolve(&store, &index, "project").unwrap().unwrap();
        assert_eq!(template.name, "Project");
        assert_eq!(template.location.source, TemplateSource::TemplatesDir);
    }

    #[test]
    fn unknown_template_is_none() {
        let store = store();
        let index = find_templates(&store, &GraphLayout::default()).unwrap();
        assert!(resolve(&store, &index, "missing").unwrap().is_none());
    }
}
