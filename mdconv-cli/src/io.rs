//! Input and output handling for the CLI.
//!
//! An input argument is read as a file when it has a file extension, from stdin
//! when it is `-`, and is taken as literal markdown otherwise. Output goes to a
//! file when a path is given, to stdout as raw bytes otherwise.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Marker for reading the input from stdin.
pub const STDIN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    Stdin,
    File(&'a Path),
    Literal(&'a str),
}

impl<'a> InputSource<'a> {
    pub fn resolve(input: &'a str) -> Self {
        if input == STDIN {
            return InputSource::Stdin;
        }
        let path = Path::new(input);
        match path.extension() {
            Some(ext) if !ext.is_empty() => InputSource::File(path),
            _ => InputSource::Literal(input),
        }
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                io::stdin().lock().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            InputSource::File(path) => fs::read(path),
            InputSource::Literal(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// Write converted output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, content: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content)?;
            stdout.flush()
        }
    }
}
