//! HTML format
//!
//! Passthrough to comrak's own HTML renderer, using the same parser options as
//! every other converter. The only post-processing is trimming surrounding
//! whitespace.

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::tree::{normalize_newlines, parser_options};

/// Converter for HTML
///
/// Registered under the name `http`, which is what the command line has always
/// accepted for HTML output.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpConverter;

impl Converter for HttpConverter {
    fn name(&self) -> &str {
        "http"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn convert(&self, source: &str) -> Result<String, ConvertError> {
        let source = normalize_newlines(source);
        let html = comrak::markdown_to_html(&source, &parser_options());
        tracing::debug!(bytes = html.len(), "rendered html");
        Ok(html.trim().to_string())
    }
}
