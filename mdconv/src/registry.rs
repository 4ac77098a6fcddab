//! Converter registry for format discovery and selection
//!
//! The registry is built explicitly (usually once, at startup) and passed by
//! reference to whatever needs to look a converter up. Registration order is
//! kept: it is the order names are listed in, including in error messages.

use crate::converter::Converter;
use crate::error::ConvertError;
use indexmap::IndexMap;

/// Registry of markdown converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::with_defaults();
/// let converter = registry.get("slack")?;
/// let output = converter.convert("**bold**")?;
/// ```
pub struct ConverterRegistry {
    converters: IndexMap<String, Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: IndexMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter with the same name already exists it is replaced and
    /// keeps its original position.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        let name = converter.name().to_string();
        tracing::debug!(format = %name, "registering converter");
        self.converters.insert(name, Box::new(converter));
    }

    /// Get a converter by name
    pub fn get(&self, name: &str) -> Result<&dyn Converter, ConvertError> {
        self.converters
            .get(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound {
                name: name.to_string(),
                available: self.list_formats(),
            })
    }

    /// Check if a converter exists
    pub fn has(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// List all converter names in registration order
    pub fn list_formats(&self) -> Vec<String> {
        self.converters.keys().cloned().collect()
    }

    /// Iterate over the registered converters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Converter> {
        self.converters.values().map(|c| c.as_ref())
    }

    /// Convert markdown source using the named converter
    pub fn convert(&self, source: &str, format: &str) -> Result<String, ConvertError> {
        self.get(format)?.convert(source)
    }

    /// Convert raw markdown bytes using the named converter
    pub fn convert_bytes(&self, source: &[u8], format: &str) -> Result<Vec<u8>, ConvertError> {
        self.get(format)?.convert_bytes(source)
    }

    /// Create a registry with the built-in converters: `slack`, then `http`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::slack::SlackConverter);
        registry.register(crate::formats::http::HttpConverter);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
