use crate::error::{Result, VendorError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if the path's final component ends in `.{extension}`.
///
/// Matches on the raw name, so dotfiles such as `.c` and names that are not
/// valid UTF-8 are still found.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{extension}");
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}

/// Recursively collects every regular file under `root` whose extension is
/// `extension`. Each file is returned exactly once.
///
/// Fails if `root` is missing or is not a directory, and on any error hit
/// while walking.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| VendorError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(VendorError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(
        "Scanned {} for *.{}: {} file(s)",
        root.display(),
        extension,
        files.len()
    );
    Ok(files)
}
