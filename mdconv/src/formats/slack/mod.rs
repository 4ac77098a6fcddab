//! Slack chat-markup ("mrkdwn") format
//!
//! # Element Mapping Table
//!
//! | Markdown                   | Chat-markup                  | Notes                                    |
//! |----------------------------|------------------------------|------------------------------------------|
//! | `# Heading` (any level)    | `*Heading*`                  | Level is not encoded                     |
//! | `**bold**` / `__bold__`    | `*bold*`                     |                                          |
//! | `*italic*` / `_italic_`    | `_italic_`                   |                                          |
//! | `~~strike~~`               | `~strike~`                   |                                          |
//! | `` `code` ``               | `` `code` ``                 | Literal trimmed                          |
//! | fenced / indented code     | ```` ```\ncode\n``` ````     | Info string dropped                      |
//! | `[title](url)`             | `<url\|title>`               | Destination is not escaped               |
//! | `> quote`                  | `> quote`                    |                                          |
//! | `- item` / `+` / `*`       | `• item`                     | Marker style is not kept                 |
//! | `42. item`                 | `1. item`                    | Always renumbered from 1                  |
//! | `---` / `***` / `___`      | blank line                   |                                          |
//! | pipe table                 | column-aligned text          | Bold header, two-space gutters           |
//!
//! # Architecture
//!
//!     markdown → comrak AST → Document Tree (crate::tree) → renderer → trimmed text
//!
//!     - renderer.rs: the enter/exit walk and the per-kind rules
//!     - table.rs: table rendering and column alignment
//!     - inline.rs: all delimiters

pub mod inline;
pub mod renderer;
pub mod table;

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::tree;

/// Converter for Slack chat-markup
#[derive(Debug, Default, Clone, Copy)]
pub struct SlackConverter;

impl Converter for SlackConverter {
    fn name(&self) -> &str {
        "slack"
    }

    fn description(&self) -> &str {
        "Slack chat-markup (mrkdwn)"
    }

    fn convert(&self, source: &str) -> Result<String, ConvertError> {
        Ok(convert_to_slack(source))
    }
}

/// Parse markdown and render it as chat-markup.
pub fn convert_to_slack(source: &str) -> String {
    let document = tree::parse(source);
    renderer::render_document(&document)
}
