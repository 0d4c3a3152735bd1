use crate::commands::helpers::today;
use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::format::AppendStrategy;
use crate::model::WrittenPage;
use crate::store::PageStore;

/// Adds `content` to the journal page for `date` (`YYYY_MM_DD`, today when
/// omitted). Existing entries are kept; new content follows a blank line.
pub fn run<S: PageStore>(
    store: &mut S,
    layout: &GraphLayout,
    content: &str,
    date: Option<&str>,
) -> Result<CmdResult> {
    let date = date.map(str::to_string).unwrap_or_else(today);
    let path = layout.journal_path(&date);
    let existing = store.read_text(&path)?;
    let was_existing = existing.is_some();

    let final_text = match existing {
        Some(existing) => AppendStrategy::BlankLine.join(&existing, content),
        None => content.to_string(),
    };

    store.write_text(&path, &final_text)?;
    log::info!("[journal] wrote {}", path.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Journal entry added: {}", date)));
    Ok(result.with_written(WrittenPage::journal(date, store.full_path(&path), was_existing)))
}
