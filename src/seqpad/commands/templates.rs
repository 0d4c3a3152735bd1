use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::store::PageStore;
use crate::templates::{find_templates, resolve, template_names};

/// Names of every discoverable template, sorted.
pub fn list<S: PageStore>(store: &S, layout: &GraphLayout) -> Result<CmdResult> {
    let index = find_templates(store, layout)?;
    let names = template_names(&index);

    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info("No templates found."));
    }
    Ok(result.with_template_names(names))
}

/// Resolves a single template and returns its structure.
pub fn show<S: PageStore>(store: &S, layout: &GraphLayout, name: &str) -> Result<CmdResult> {
    let index = find_templates(store, layout)?;
    match resolve(store, &index, name)? {
        Some(template) => Ok(CmdResult::default().with_template(template)),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Template not found: {}", name)));
            Ok(result)
        }
    }
}
