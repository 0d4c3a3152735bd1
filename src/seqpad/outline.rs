//! Hierarchical outline items.
//!
//! The parser yields a flat list of [`OutlineNode`]s; this module nests them
//! into a tree of [`OutlineItem`]s and renders such a tree back to
//! tab-indented bullets.

use serde::Serialize;

use crate::model::OutlineNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutlineItem {
    Leaf {
        content: String,
    },
    Node {
        content: String,
        children: Vec<OutlineItem>,
    },
}

impl OutlineItem {
    pub fn leaf(content: impl Into<String>) -> Self {
        OutlineItem::Leaf {
            content: content.into(),
        }
    }

    pub fn node(content: impl Into<String>, children: Vec<OutlineItem>) -> Self {
        OutlineItem::Node {
            content: content.into(),
            children,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            OutlineItem::Leaf { content } | OutlineItem::Node { content, .. } => content,
        }
    }

    fn push_child(&mut self, child: OutlineItem) {
        if let OutlineItem::Leaf { content } = self {
            let content = std::mem::take(content);
            *self = OutlineItem::node(content, Vec::new());
        }
        if let OutlineItem::Node { children, .. } = self {
            children.push(child);
        }
    }
}

/// Nests flat nodes by level.
///
/// A node becomes a child of the closest preceding node with a smaller level.
/// Level jumps (0 straight to 3) attach to that closest ancestor rather than
/// inventing empty intermediate items.
pub fn build_outline(nodes: &[OutlineNode]) -> Vec<OutlineItem> {
    // Each stack entry is (level, item) for the currently open ancestry.
    let mut stack: Vec<(usize, OutlineItem)> = Vec::new();
    let mut roots = Vec::new();

    for node in nodes {
        while let Some((level, _)) = stack.last() {
            if *level < node.level {
                break;
            }
            close_top(&mut stack, &mut roots);
        }
        stack.push((node.level, OutlineItem::leaf(node.content.clone())));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<(usize, OutlineItem)>, roots: &mut Vec<OutlineItem>) {
    if let Some((_, item)) = stack.pop() {
        match stack.last_mut() {
            Some((_, parent)) => parent.push_child(item),
            None => roots.push(item),
        }
    }
}

/// Renders items as `- ` bullets, one tab per level starting at `indent_level`.
pub fn render_outline(items: &[OutlineItem], indent_level: usize) -> String {
    let indent = "\t".repeat(indent_level);
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        match item {
            OutlineItem::Leaf { content } => lines.push(format!("{}- {}", indent, content)),
            OutlineItem::Node { content, children } => {
                lines.push(format!("{}- {}", indent, content));
                if !children.is_empty() {
                    lines.push(render_outline(children, indent_level + 1));
                }
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_outline;

    #[test]
    fn renders_nested_items() {
        let items = vec![
            OutlineItem::node(
                "Project",
                vec![
                    OutlineItem::leaf("scope"),
                    OutlineItem::node("risks", vec![OutlineItem::leaf("budget")]),
                ],
            ),
            OutlineItem::leaf("Next"),
        ];
        assert_eq!(
            render_outline(&items, 0),
            "- Project\n\t- scope\n\t- risks\n\t\t- budget\n- Next"
        );
    }

    #[test]
    fn renders_with_base_indent() {
        let items = vec![OutlineItem::leaf("a")];
        assert_eq!(render_outline(&items, 2), "\t\t- a");
    }

    #[test]
    fn builds_tree_from_tab_outline() {
        let nodes = parse_outline("- a\n\t- b\n\t\t- c\n\t- d\n- e");
        let tree = build_outline(&nodes);
        // "- a" and "\t- b" both sit at level 1, so they are siblings.
        let contents: Vec<&str> = tree.iter().map(|i| i.content()).collect();
        assert_eq!(contents, vec!["a", "b", "d", "e"]);
        match &tree[1] {
            OutlineItem::Node { children, .. } => {
                assert_eq!(children, &vec![OutlineItem::leaf("c")]);
            }
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn builds_tree_from_levels() {
        let nodes = vec![
            node(0, "root"),
            node(1, "child"),
            node(3, "deep"),
            node(1, "sibling"),
            node(0, "next"),
        ];
        let tree = build_outline(&nodes);
        assert_eq!(
            tree,
            vec![
                OutlineItem::node(
                    "root",
                    vec![
                        OutlineItem::node("child", vec![OutlineItem::leaf("deep")]),
                        OutlineItem::leaf("sibling"),
                    ],
                ),
                OutlineItem::leaf("next"),
            ]
        );
    }

    #[test]
    fn round_trips_rendered_tree() {
        let items = vec![OutlineItem::node(
            "a",
            vec![OutlineItem::leaf("b"), OutlineItem::leaf("c")],
        )];
        let rendered = render_outline(&items, 1);
        assert_eq!(build_outline(&parse_outline(&rendered)), items);
    }

    fn node(level: usize, content: &str) -> OutlineNode {
        OutlineNode {
            level,
            content: content.to_string(),
            raw: content.to_string(),
        }
    }
}
