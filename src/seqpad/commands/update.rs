use crate::commands::{create, CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::format::AppendStrategy;
use crate::model::WrittenPage;
use crate::store::PageStore;

/// Appends to (or replaces) an existing page. A page that does not exist yet
/// is created through [`create::run`].
pub fn run<S: PageStore>(
    store: &mut S,
    layout: &GraphLayout,
    title: &str,
    content: &str,
    append: bool,
) -> Result<CmdResult> {
    let path = layout.page_path(title);
    let Some(existing) = store.read_text(&path)? else {
        log::debug!("[update] {} missing, creating it", path.display());
        return create::run(store, layout, title, content, false);
    };

    let final_text = if append {
        AppendStrategy::BlankLine.join(&existing, content)
    } else {
        content.to_string()
    };

    store.write_text(&path, &final_text)?;
    log::info!("[update] wrote {}", path.display());

    let mut written = WrittenPage::page(title, store.full_path(&path), true);
    written.appended = append;
    written.overwritten = !append;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Page updated: {}", title)));
    Ok(result.with_written(written))
}
