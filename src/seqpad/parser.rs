//! # Page Structure Parser
//!
//! Pure functions that turn raw page text into structure: properties, a flat
//! outline, section headers and a handful of content flags.
//!
//! Every function here is total over `&str`. Malformed input degrades to empty
//! containers and `false` flags; nothing in this module returns an error.
//!
//! ## Indentation
//!
//! Outline depth comes from the leading run of a line and nothing else:
//!
//! - a run containing tabs counts its tabs,
//! - a run of repeated `"- "` markers counts the markers,
//! - any other whitespace run counts space pairs (`len / 2`).
//!
//! The bullet text never influences the level.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{IndentStyle, OutlineNode, PageAnalysis, Properties, TemplateStructure};

static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+(?:-\w+)*)::(.+)$").unwrap());
static INDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\t+|(?:- )+|\s+)").unwrap());
static TODO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"TODO|DOING|DONE|LATER|NOW").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());

const QUERY_MARKER: &str = "{{query";

/// Extracts `key:: value` properties.
///
/// Lines are trimmed before matching. Both key and value are trimmed; a key
/// declared twice keeps its last value.
pub fn parse_properties(text: &str) -> Properties {
    let mut properties = Properties::new();
    for line in text.split('\n') {
        if let Some(caps) = PROPERTY_RE.captures(line.trim()) {
            properties.insert(caps[1].trim().to_string(), caps[2].trim().to_string());
        }
    }
    properties
}

/// Parses every non-blank line into an [`OutlineNode`], in document order.
pub fn parse_outline(text: &str) -> Vec<OutlineNode> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| OutlineNode {
            level: indent_level(line),
            content: strip_markers(line).to_string(),
            raw: line.to_string(),
        })
        .collect()
}

fn indent_level(line: &str) -> usize {
    let Some(run) = INDENT_RE.find(line).map(|m| m.as_str()) else {
        return 0;
    };

    if run.contains('\t') {
        run.matches('\t').count()
    } else if run.starts_with("- ") {
        run.matches("- ").count()
    } else {
        run.chars().count() / 2
    }
}

fn strip_markers(line: &str) -> &str {
    line.trim().trim_start_matches(['-', ' ', '\t'])
}

/// Header text of every `##`-style line, with the leading `#`s and spaces removed.
pub fn parse_sections(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with("##"))
        .map(|line| line.trim_start_matches(['#', ' ']).to_string())
        .collect()
}

pub fn extract_template_structure(text: &str) -> TemplateStructure {
    TemplateStructure {
        properties: parse_properties(text),
        sections: parse_sections(text),
        outline: parse_outline(text),
        raw_content: text.to_string(),
    }
}

/// Full structural analysis of a page.
///
/// The content flags are whole-text existence checks, so a marker split
/// across structure (or sitting inside another word) still counts.
pub fn analyze_page(text: &str) -> PageAnalysis {
    PageAnalysis {
        properties: parse_properties(text),
        outline: parse_outline(text),
        sections: parse_sections(text),
        has_todos: TODO_RE.is_match(text),
        has_tags: TAG_RE.is_match(text),
        has_links: LINK_RE.is_match(text),
        has_queries: text.contains(QUERY_MARKER),
        indent_style: if text.contains('\t') {
            IndentStyle::Tabs
        } else {
            IndentStyle::Spaces
        },
        line_count: text.split('\n').count(),
    }
}
