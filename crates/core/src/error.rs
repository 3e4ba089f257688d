use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendorError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Manifest {} is not a JSON object", .0.display())]
    ManifestNotObject(PathBuf),
    #[error("File name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
    #[error("Path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),
}

impl VendorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VendorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VendorError>;
