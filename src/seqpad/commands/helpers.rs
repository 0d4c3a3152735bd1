use crate::error::{Result, SeqpadError};
use crate::store::PageStore;
use chrono::Local;

const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Date format used to name journal pages.
pub const JOURNAL_DATE_FORMAT: &str = "%Y_%m_%d";

/// Replaces characters that are not allowed in file names with `_` and trims
/// surrounding whitespace.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn today() -> String {
    Local::now().format(JOURNAL_DATE_FORMAT).to_string()
}

pub fn require_root<S: PageStore>(store: &S) -> Result<()> {
    if store.root_exists() {
        Ok(())
    } else {
        Err(SeqpadError::NotFound(store.full_path(std::path::Path::new(""))))
    }
}
