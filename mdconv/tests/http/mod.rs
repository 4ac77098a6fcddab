//! HTML format tests

mod convert;
