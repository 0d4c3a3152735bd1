use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::model::PageContext;
use crate::outline::build_outline;
use crate::parser::analyze_page;
use crate::store::PageStore;

/// Loads and analyzes a page. A missing page is not an error: the result
/// simply carries no context, plus an info message.
pub fn run<S: PageStore>(store: &S, layout: &GraphLayout, title: &str) -> Result<CmdResult> {
    let path = layout.page_path(title);
    let mut result = CmdResult::default();

    let Some(content) = store.read_text(&path)? else {
        result.add_message(CmdMessage::info(format!("Page does not exist: {}", title)));
        return Ok(result);
    };

    let analysis = analyze_page(&content);
    let tree = build_outline(&analysis.outline);
    Ok(result.with_context(PageContext {
        title: title.to_string(),
        path: store.full_path(&path),
        analysis,
        tree,
        content,
    }))
}
