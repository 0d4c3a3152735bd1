//! # Content Formatting
//!
//! Turns free text into outline bullets, synthesizes pages from a template
//! skeleton, and joins new content onto existing pages.
//!
//! ## Template merge layout
//!
//! [`merge_with_template`] emits, in this order:
//!
//! 1. the template properties as `key:: value` lines, then one blank line,
//! 2. every template section as `## <section>` followed by a blank line,
//! 3. the new content, bulleted line by line like [`format_as_outline`].
//!
//! New content is not distributed under the section headers. All headers come
//! first and the content follows them as one flat block, so a `##` line in the
//! new content is passed through next to, not merged with, the template's own
//! headers.

use serde::Serialize;

use crate::model::TemplateStructure;

const BULLET: &str = "- ";

/// How new content is joined onto an existing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppendStrategy {
    /// `existing + "\n\n" + addition`. Used by smart updates, plain updates
    /// and journals.
    BlankLine,
    /// `existing + "\n\n---\n\n" + addition`. Used when `create` hits a page
    /// that already exists.
    Divider,
}

impl AppendStrategy {
    pub fn join(self, existing: &str, addition: &str) -> String {
        match self {
            AppendStrategy::BlankLine => format!("{}\n\n{}", existing, addition),
            AppendStrategy::Divider => format!("{}\n\n---\n\n{}", existing, addition),
        }
    }
}

/// Bullets every top-level line that is not already a header or a bullet.
///
/// Lines are trimmed; blank lines become empty lines. Nesting is never
/// inferred.
pub fn format_as_outline(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(['-', '*']) {
                line.to_string()
            } else {
                format!("{}{}", BULLET, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a new page from a template skeleton and fresh content.
///
/// The content block follows the [`format_as_outline`] rules, so an empty
/// skeleton yields exactly the outline-formatted content.
pub fn merge_with_template(structure: &TemplateStructure, new_content: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !structure.properties.is_empty() {
        for (key, value) in &structure.properties {
            lines.push(format!("{}:: {}", key, value));
        }
        lines.push(String::new());
    }

    for section in &structure.sections {
        lines.push(format!("## {}", section));
        lines.push(String::new());
    }

    lines.push(format_as_outline(new_content));
    lines.join("\n")
}
