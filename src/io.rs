//! I/O helpers for reading the input stream and writing the destination file.

use crate::errors::Error;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read standard input to end-of-stream as UTF-8 text.
pub fn read_stdin() -> Result<String, Error> {
    read_to_string(std::io::stdin().lock())
}

/// Read a stream to end-of-stream as UTF-8 text.
///
/// Invalid UTF-8 surfaces as an `InvalidData` I/O error rather than being
/// replaced or truncated.
pub fn read_to_string(mut reader: impl Read) -> Result<String, Error> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(Error::input_read)?;
    Ok(content)
}

/// Write text to a file, creating it if absent and truncating it if present.
pub fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|e| Error::file_write(path, e))?;
    Ok(())
}
