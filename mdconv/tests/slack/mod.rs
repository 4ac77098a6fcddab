//! Slack chat-markup tests
//!
//! Markdown in, chat-markup out, through the public converter API.

mod convert;
mod kitchensink;
mod table;

use mdconv::formats::SlackConverter;
use mdconv::Converter;

pub(crate) fn slack(markdown: &str) -> String {
    SlackConverter
        .convert(markdown)
        .expect("slack conversion never fails")
}
