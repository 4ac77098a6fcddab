//! The Document Tree
//!
//!     A small, closed set of node kinds that the chat-markup renderer knows how to
//!     handle. The tree is produced once per conversion from the comrak AST (see
//!     ./from_comrak.rs) and is never mutated afterwards.
//!
//!     Kinds the renderer has no rule for are kept as [`NodeValue::Unsupported`] so
//!     that their literal text and children survive instead of being dropped.

pub mod from_comrak;

use crate::converter::decode_utf8;
use crate::error::ConvertError;
use comrak::{parse_document, Arena, ComrakOptions};
use serde::Serialize;

/// A node in the Document Tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub value: NodeValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The kind of a node plus its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeValue {
    Document,
    Heading {
        level: u8,
    },
    Paragraph,
    Strong,
    Emphasis,
    Strikethrough,
    BlockQuote,
    /// `start` is the number written in the source. Renderers are free to ignore it.
    List {
        ordered: bool,
        start: usize,
    },
    ListItem,
    InlineCode {
        literal: String,
    },
    CodeBlock {
        info: String,
        literal: String,
    },
    Link {
        destination: String,
        title: String,
    },
    HorizontalRule,
    Table,
    TableHeader,
    TableBody,
    TableRow,
    TableCell,
    Text {
        literal: String,
    },
    /// A parser construct with no dedicated kind (raw HTML, images, footnotes).
    /// Carries a literal when the construct is a leaf.
    Unsupported {
        name: String,
        literal: Option<String>,
    },
}

impl Node {
    pub fn new(value: NodeValue, children: Vec<Node>) -> Self {
        Node { value, children }
    }

    pub fn leaf(value: NodeValue) -> Self {
        Node {
            value,
            children: Vec::new(),
        }
    }

    pub fn text(literal: impl Into<String>) -> Self {
        Node::leaf(NodeValue::Text {
            literal: literal.into(),
        })
    }

    /// Leaf kinds carry their content as a literal and never see an exit event.
    pub fn is_leaf(&self) -> bool {
        match &self.value {
            NodeValue::Text { .. }
            | NodeValue::InlineCode { .. }
            | NodeValue::CodeBlock { .. }
            | NodeValue::HorizontalRule => true,
            NodeValue::Unsupported { literal, .. } => literal.is_some(),
            _ => false,
        }
    }

    /// Short kind name, used in log output.
    pub fn kind_name(&self) -> &str {
        match &self.value {
            NodeValue::Document => "document",
            NodeValue::Heading { .. } => "heading",
            NodeValue::Paragraph => "paragraph",
            NodeValue::Strong => "strong",
            NodeValue::Emphasis => "emphasis",
            NodeValue::Strikethrough => "strikethrough",
            NodeValue::BlockQuote => "block_quote",
            NodeValue::List { .. } => "list",
            NodeValue::ListItem => "list_item",
            NodeValue::InlineCode { .. } => "inline_code",
            NodeValue::CodeBlock { .. } => "code_block",
            NodeValue::Link { .. } => "link",
            NodeValue::HorizontalRule => "horizontal_rule",
            NodeValue::Table => "table",
            NodeValue::TableHeader => "table_header",
            NodeValue::TableBody => "table_body",
            NodeValue::TableRow => "table_row",
            NodeValue::TableCell => "table_cell",
            NodeValue::Text { .. } => "text",
            NodeValue::Unsupported { name, .. } => name,
        }
    }
}

/// Replace `\r\n` and lone `\r` line endings with `\n`.
pub fn normalize_newlines(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Comrak options shared by every converter: CommonMark plus the GFM table,
/// strikethrough and autolink extensions.
pub fn parser_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Parse markdown source into a Document Tree.
pub fn parse(source: &str) -> Node {
    let source = normalize_newlines(source);
    let arena = Arena::new();
    let options = parser_options();
    let root = parse_document(&arena, &source, &options);
    let tree = from_comrak::from_comrak(root);
    tracing::debug!(
        bytes = source.len(),
        blocks = tree.children.len(),
        "parsed markdown into document tree"
    );
    tree
}

/// Parse raw input bytes, failing the same way converters do on non-UTF-8 input.
pub fn parse_bytes(source: &[u8]) -> Result<Node, ConvertError> {
    decode_utf8(source).map(parse)
}
