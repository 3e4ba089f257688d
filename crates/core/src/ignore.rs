use crate::error::{Result, VendorError};
use std::fs;
use std::path::Path;

/// One name per line, each terminated by a newline.
pub fn render(names: &[String]) -> String {
    let mut text = names.join("\n");
    text.push('\n');
    text
}

/// Overwrites `path` with `names`. Existing content is discarded, not merged.
pub fn write_ignore_file(path: &Path, names: &[String]) -> Result<()> {
    fs::write(path, render(names)).map_err(|e| VendorError::io(path, e))
}
