//! File-to-file conversion.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a Markdown file into memory.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the rendered HTML, replacing any existing file.
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `input` to HTML and write it to `output`.
///
/// The output file is only touched once conversion has succeeded, so a
/// missing or malformed input leaves it as it was.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let markdown = read_input(input)?;
    log::debug!("read {} bytes from {}", markdown.len(), input.display());

    let html = crate::to_html(&markdown)?;

    write_output(output, &html)?;
    log::debug!("wrote {} bytes to {}", html.len(), output.display());
    Ok(())
}
