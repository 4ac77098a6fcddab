//! Format implementations
//!
//! Each format turns markdown source into one target markup and is exposed
//! through the [`crate::Converter`] trait.

pub mod http;
pub mod slack;

pub use http::HttpConverter;
pub use slack::SlackConverter;
