//! Markdown conversion for chat platforms and the web
//!
//!     This crate converts standard Markdown into other markups behind one uniform
//!     interface, the [`Converter`] trait. Two converters ship with it:
//!
//!     - `slack`: the chat-markup dialect used by Slack. This is the interesting one.
//!     - `http`: plain HTML, straight from comrak.
//!
//!     This is a pure lib: no code here should assume a shell environment, be it
//!     stdout, env vars or the file system. The CLI lives in mdconv-cli.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── converter.rs            # Converter trait
//!     ├── registry.rs             # ConverterRegistry, ordered lookup by name
//!     ├── tree                    # Document Tree and the comrak adapter
//!     └── formats
//!         ├── slack               # renderer, table alignment, delimiters
//!         └── http
//!
//!     Parsing is never done here: comrak parses, ./tree/from_comrak.rs adapts its
//!     AST to the small closed Document Tree, and the chat-markup renderer only
//!     ever sees that tree.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── slack
//!     │   ├── convert.rs          # one case per markdown construct
//!     │   ├── kitchensink.rs      # everything in one document
//!     │   └── properties.rs       # proptest properties
//!     └── http
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     declares them as modules.

pub mod converter;
pub mod error;
pub mod formats;
pub mod registry;
pub mod tree;

pub use converter::Converter;
pub use error::ConvertError;
pub use registry::ConverterRegistry;
pub use tree::{Node, NodeValue};
