use crate::commands::helpers::require_root;
use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::format::AppendStrategy;
use crate::model::WrittenPage;
use crate::store::PageStore;

/// Writes `content` to a page as-is.
///
/// If the page already exists and `overwrite` is off, the new content is
/// added below a `---` divider instead of replacing the page.
pub fn run<S: PageStore>(
    store: &mut S,
    layout: &GraphLayout,
    title: &str,
    content: &str,
    overwrite: bool,
) -> Result<CmdResult> {
    require_root(store)?;

    let path = layout.page_path(title);
    let existing = store.read_text(&path)?;
    let was_existing = existing.is_some();

    let final_text = match existing {
        Some(existing) if !overwrite => AppendStrategy::Divider.join(&existing, content),
        _ => content.to_string(),
    };

    store.write_text(&path, &final_text)?;
    log::info!("[create] wrote {}", path.display());

    let mut written = WrittenPage::page(title, store.full_path(&path), was_existing);
    written.overwritten = overwrite;
    written.appended = was_existing && !overwrite;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if written.appended {
        format!("Page extended: {}", title)
    } else {
        format!("Page created: {}", title)
    }));
    Ok(result.with_written(written))
}
