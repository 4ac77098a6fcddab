//! Converter trait definition
//!
//! Every output format implements [`Converter`]. The trait takes standard
//! Markdown in and hands target markup back, so the command line layer can
//! treat all formats uniformly.

use crate::error::ConvertError;

/// Trait for markdown converters
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Converter for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn convert(&self, source: &str) -> Result<String, ConvertError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// Unique, stable name used to select this converter (e.g. "slack")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Convert markdown source text into the target format
    fn convert(&self, source: &str) -> Result<String, ConvertError>;

    /// Convert raw markdown bytes.
    ///
    /// The bytes must be valid UTF-8; anything else is rejected before the
    /// parser ever sees it.
    fn convert_bytes(&self, source: &[u8]) -> Result<Vec<u8>, ConvertError> {
        self.convert(decode_utf8(source)?).map(String::into_bytes)
    }
}

/// Borrow `source` as text, rejecting anything that is not UTF-8.
pub fn decode_utf8(source: &[u8]) -> Result<&str, ConvertError> {
    std::str::from_utf8(source)
        .map_err(|e| ConvertError::InvalidInput(format!("input is not valid UTF-8: {e}")))
}
