//! Comrak AST → Document Tree
//!
//! Comrak is the parser behind every converter. This adapter maps its node values
//! onto the closed set of kinds in [`NodeValue`], with a few reshapings:
//!
//! - soft and hard line breaks become `Text("\n")`
//! - table rows are grouped under `TableHeader` / `TableBody`, since comrak keeps
//!   them flat and marks header rows with a flag
//! - raw HTML becomes a leaf `Unsupported` node holding the markup
//! - every other construct becomes a container `Unsupported` node named after the
//!   comrak value, keeping its children

use super::{Node, NodeValue};
use comrak::nodes::{AstNode, ListType, NodeValue as ComrakValue};

/// Convert a comrak node (usually the document root) into a Document Tree node.
pub fn from_comrak<'a>(node: &'a AstNode<'a>) -> Node {
    let data = node.data.borrow();

    match &data.value {
        ComrakValue::Document => container(NodeValue::Document, node),
        ComrakValue::Heading(heading) => container(
            NodeValue::Heading {
                level: heading.level,
            },
            node,
        ),
        ComrakValue::Paragraph => container(NodeValue::Paragraph, node),
        ComrakValue::Strong => container(NodeValue::Strong, node),
        ComrakValue::Emph => container(NodeValue::Emphasis, node),
        ComrakValue::Strikethrough => container(NodeValue::Strikethrough, node),
        ComrakValue::BlockQuote => container(NodeValue::BlockQuote, node),
        ComrakValue::List(list) => container(
            NodeValue::List {
                ordered: matches!(list.list_type, ListType::Ordered),
                start: list.start,
            },
            node,
        ),
        ComrakValue::Item(_) => container(NodeValue::ListItem, node),
        ComrakValue::Code(code) => Node::leaf(NodeValue::InlineCode {
            literal: code.literal.clone(),
        }),
        ComrakValue::CodeBlock(code_block) => Node::leaf(NodeValue::CodeBlock {
            info: code_block.info.clone(),
            literal: code_block.literal.clone(),
        }),
        ComrakValue::Link(link) => container(
            NodeValue::Link {
                destination: link.url.clone(),
                title: link.title.clone(),
            },
            node,
        ),
        ComrakValue::ThematicBreak => Node::leaf(NodeValue::HorizontalRule),
        ComrakValue::Table(_) => table(node),
        // Only reached for rows outside a table, which comrak never produces
        ComrakValue::TableRow(_) => container(NodeValue::TableRow, node),
        ComrakValue::TableCell => container(NodeValue::TableCell, node),
        ComrakValue::Text(text) => Node::text(text.clone()),
        ComrakValue::SoftBreak | ComrakValue::LineBreak => Node::text("\n"),
        ComrakValue::HtmlInline(html) => Node::leaf(NodeValue::Unsupported {
            name: "html_inline".to_string(),
            literal: Some(html.clone()),
        }),
        ComrakValue::HtmlBlock(html) => Node::leaf(NodeValue::Unsupported {
            name: "html_block".to_string(),
            literal: Some(html.literal.clone()),
        }),
        other => container(
            NodeValue::Unsupported {
                name: unsupported_name(other).to_string(),
                literal: None,
            },
            node,
        ),
    }
}

/// Name carried by container `Unsupported` nodes.
fn unsupported_name(value: &ComrakValue) -> &'static str {
    match value {
        ComrakValue::Image(_) => "image",
        ComrakValue::FootnoteReference(_) => "footnote_reference",
        ComrakValue::FootnoteDefinition(_) => "footnote_definition",
        ComrakValue::FrontMatter(_) => "front_matter",
        ComrakValue::TaskItem(_) => "task_item",
        ComrakValue::Superscript => "superscript",
        ComrakValue::DescriptionList => "description_list",
        _ => "unsupported",
    }
}

fn container<'a>(value: NodeValue, node: &'a AstNode<'a>) -> Node {
    Node::new(value, node.children().map(from_comrak).collect())
}

fn table<'a>(node: &'a AstNode<'a>) -> Node {
    let mut children = Vec::new();
    let mut body = Vec::new();

    for row in node.children() {
        let is_header = matches!(row.data.borrow().value, ComrakValue::TableRow(true));
        let converted = from_comrak(row);
        if is_header {
            children.push(Node::new(NodeValue::TableHeader, vec![converted]));
        } else {
            body.push(converted);
        }
    }

    if !body.is_empty() {
        children.push(Node::new(NodeValue::TableBody, body));
    }

    Node::new(NodeValue::Table, children)
}
