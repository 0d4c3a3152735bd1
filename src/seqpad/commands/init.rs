use crate::commands::{CmdMessage, CmdResult, GraphLayout};
use crate::error::Result;
use crate::store::PageStore;
use std::path::Path;

pub fn run<S: PageStore>(store: &mut S, layout: &GraphLayout) -> Result<CmdResult> {
    for dir in [
        &layout.pages_dir,
        &layout.journals_dir,
        &layout.templates_dir,
    ] {
        store.ensure_dir(dir)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized graph at {}",
        store.full_path(Path::new("")).display()
    )));
    Ok(result)
}
