//! Document Tree → chat-markup
//!
//! A depth-first walk with an enter and an exit event per node. The enter rule
//! for a kind either lets the walk descend into the children, or renders the
//! children itself (usually to trim them before wrapping) and tells the walk to
//! skip them.
//!
//! Exit events fire for every container node, including those whose children
//! were rendered by the enter rule; leaf nodes never see one. Exit writes a
//! single newline except for links, table cells, table bodies and table headers.
//! Block separation in the output comes from these exit newlines together with
//! the newline a paragraph writes on enter.

use super::{inline, table};
use crate::tree::{Node, NodeValue};

/// What the walk does after a node's enter rule ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Continue,
    SkipChildren,
}

/// Render a full document: walk from the root, then trim the result.
pub fn render_document(document: &Node) -> String {
    let output = render_trimmed(document);
    tracing::debug!(bytes = output.len(), "rendered chat-markup");
    output
}

/// Render a node and its subtree, untrimmed.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    walk(node, &mut out);
    out
}

/// Render a node and trim surrounding whitespace. Every rule that wraps child
/// text in delimiters goes through this, so trimming happens before wrapping.
pub fn render_trimmed(node: &Node) -> String {
    render(node).trim().to_string()
}

fn walk(node: &Node, out: &mut String) {
    let status = enter(node, out);
    if node.is_leaf() {
        return;
    }
    if status == Walk::Continue {
        for child in &node.children {
            walk(child, out);
        }
    }
    exit(node, out);
}

fn enter(node: &Node, out: &mut String) -> Walk {
    match &node.value {
        NodeValue::Document
        | NodeValue::TableCell
        | NodeValue::TableBody => Walk::Continue,

        // Every level renders the same
        NodeValue::Heading { .. } => {
            for child in &node.children {
                out.push('\n');
                out.push_str(&inline::bold(&render(child)));
            }
            Walk::SkipChildren
        }

        NodeValue::Paragraph => {
            out.push('\n');
            Walk::Continue
        }

        NodeValue::BlockQuote => {
            for child in &node.children {
                out.push_str(&inline::quote(&render_trimmed(child)));
            }
            Walk::SkipChildren
        }

        NodeValue::Strong => wrap_children(node, out, inline::bold),
        NodeValue::Emphasis => wrap_children(node, out, inline::italic),
        NodeValue::Strikethrough => wrap_children(node, out, inline::strike),

        NodeValue::InlineCode { literal } => {
            out.push_str(&inline::inline_code(literal.trim()));
            Walk::Continue
        }

        NodeValue::CodeBlock { literal, .. } => {
            out.push_str(&inline::code_block(literal.trim()));
            Walk::Continue
        }

        NodeValue::Link { destination, .. } => {
            let title: String = node.children.iter().map(render).collect();
            out.push_str(&inline::link(destination, title.trim()));
            Walk::SkipChildren
        }

        NodeValue::HorizontalRule => {
            out.push_str("\n\n");
            Walk::Continue
        }

        NodeValue::List { ordered, .. } => {
            render_list(node, *ordered, out);
            Walk::SkipChildren
        }

        NodeValue::ListItem => {
            for child in &node.children {
                out.push_str(&render_trimmed(child));
            }
            Walk::SkipChildren
        }

        NodeValue::Table => {
            out.push('\n');
            out.push_str(&table::render_table(node));
            Walk::SkipChildren
        }

        NodeValue::TableHeader => {
            // First and only child is the header row
            if let Some(row) = node.children.first() {
                let cells: Vec<String> = row
                    .children
                    .iter()
                    .map(|cell| inline::bold(&render_trimmed(cell)))
                    .collect();
                out.push_str(&cells.join("\t"));
            }
            Walk::SkipChildren
        }

        NodeValue::TableRow => {
            let cells: Vec<String> = node.children.iter().map(render).collect();
            out.push_str(&cells.join("\t"));
            Walk::SkipChildren
        }

        NodeValue::Text { literal } => {
            out.push_str(literal);
            Walk::Continue
        }

        NodeValue::Unsupported { name, literal } => {
            tracing::debug!(kind = %name, "no chat-markup rule for node, using fallback");
            match literal {
                Some(literal) => out.push_str(literal),
                None => {
                    for child in &node.children {
                        out.push_str(&render(child));
                    }
                }
            }
            Walk::SkipChildren
        }
    }
}

fn exit(node: &Node, out: &mut String) {
    match node.value {
        NodeValue::Link { .. }
        | NodeValue::TableCell
        | NodeValue::TableBody
        | NodeValue::TableHeader => {}
        _ => out.push('\n'),
    }
}

fn wrap_children(node: &Node, out: &mut String, wrap: fn(&str) -> String) -> Walk {
    for child in &node.children {
        out.push_str(&wrap(&render_trimmed(child)));
    }
    Walk::SkipChildren
}

/// Source start numbers are discarded: ordered lists always count from 1.
fn render_list(list: &Node, ordered: bool, out: &mut String) {
    let start = 1;
    for (index, item) in list.children.iter().enumerate() {
        let marker = inline::list_marker(ordered, start + index);
        out.push_str(&marker);
        out.push(' ');
        out.push_str(&render_trimmed(item));
        out.push('\n');
    }
}
