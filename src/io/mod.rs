pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, PlainWriter, TerminalWriter};

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

/// Split input text into raw identifiers, one per line.
///
/// One line ending (`\n` or `\r\n`) is dropped per line; everything else on
/// the line, including blank lines and any other `\r`, is a raw identifier.
pub fn parse_identifiers(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}

pub fn read_identifiers_from<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(parse_identifiers(&contents))
}

/// Read identifiers from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_identifiers(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            Ok(parse_identifiers(&contents))
        }
        _ => read_identifiers_from(std::io::stdin().lock()),
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
