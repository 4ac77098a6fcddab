//! Shared configuration loader for markdownconverter.
//!
//! `defaults/mdconv.default.toml` is compiled in, so a run with no config files at
//! all still has a complete [`MdconvConfig`]. [`load`] is what the CLI calls;
//! [`Loader`] exposes the individual layers.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdconv.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "markdownconverter.toml";

/// Top-level configuration consumed by markdownconverter applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdconvConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
}

impl ConvertConfig {
    /// The configured default format, if one is set.
    pub fn default_format(&self) -> Option<&str> {
        let name = self.default_format.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Builds an [`MdconvConfig`] from layered TOML sources.
///
/// Layers apply in the order they are added, later ones winning key by key:
/// the embedded defaults, then `markdownconverter.toml` from the working
/// directory, then the file named by `--config`, then single-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer `markdownconverter.toml` from `dir` when it exists.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        self.add_toml(dir.as_ref().join(LOCAL_CONFIG_FILE), false)
    }

    /// Layer an explicitly named file. A missing file fails [`Loader::build`].
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MdconvConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn add_toml(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the configuration for a run started in `dir`, with an optional
/// explicit file from the command line.
pub fn load(dir: impl AsRef<Path>, explicit: Option<&Path>) -> Result<MdconvConfig, ConfigError> {
    let loader = Loader::new().with_local_file(dir);
    let loader = match explicit {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    loader.build()
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<MdconvConfig, ConfigError> {
    Loader::new().build()
}
