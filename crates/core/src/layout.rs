//! Fixed on-disk layout of a project that vendors BearSSL.
//!
//! ```text
//! <root>/src/                  flat destination for copied files
//! <root>/src/bearssl/src/      library implementation (and private headers)
//! <root>/src/bearssl/inc/      library public headers
//! <root>/src/moon.pkg.json     package manifest
//! <root>/src/.gitignore        ignore list for the copied files
//! ```

use std::path::{Path, PathBuf};

pub const SOURCE_DIR: &str = "src";
pub const LIBRARY_DIR: &str = "bearssl";
pub const LIBRARY_SOURCE_DIR: &str = "src";
pub const LIBRARY_INCLUDE_DIR: &str = "inc";
pub const MANIFEST_FILE: &str = "moon.pkg.json";
pub const IGNORE_FILE: &str = ".gitignore";

/// Hand-written glue unit that bridges the library to the package. It lives in
/// the destination directory already and is never copied.
pub const SENTINEL_STUB: &str = "bearssl.c";

pub const SOURCE_EXTENSION: &str = "c";
pub const HEADER_EXTENSION: &str = "h";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLayout {
    pub dest_dir: PathBuf,
    pub library_source_dir: PathBuf,
    pub library_include_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub ignore_path: PathBuf,
    pub sentinel: String,
}

impl VendorLayout {
    pub fn new(project_root: &Path) -> Self {
        let dest_dir = project_root.join(SOURCE_DIR);
        let library_dir = dest_dir.join(LIBRARY_DIR);

        Self {
            library_source_dir: library_dir.join(LIBRARY_SOURCE_DIR),
            library_include_dir: library_dir.join(LIBRARY_INCLUDE_DIR),
            manifest_path: dest_dir.join(MANIFEST_FILE),
            ignore_path: dest_dir.join(IGNORE_FILE),
            sentinel: SENTINEL_STUB.to_string(),
            dest_dir,
        }
    }
}
