use crate::error::{Result, VendorError};
use std::fs;
use std::path::Path;

/// Copies `source` into `dest_dir` under its basename, overwriting any file
/// already there. Returns the basename.
pub fn copy_flat(source: &Path, dest_dir: &Path) -> Result<String> {
    let name = source
        .file_name()
        .ok_or_else(|| VendorError::MissingFileName(source.to_path_buf()))?;
    let name = name
        .to_str()
        .ok_or_else(|| VendorError::NonUtf8Name(source.to_path_buf()))?
        .to_string();

    let target = dest_dir.join(&name);
    fs::copy(source, &target).map_err(|e| VendorError::io(&target, e))?;
    tracing::debug!("Copied {} -> {}", source.display(), target.display());

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_flat_discards_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("lib/src/rsa");
        let dest = temp.path().join("out");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(nested.join("rsa_i31.c"), b"int x;\n").unwrap();

        let name = copy_flat(&nested.join("rsa_i31.c"), &dest).unwrap();

        assert_eq!(name, "rsa_i31.c");
        assert_eq!(fs::read(dest.join("rsa_i31.c")).unwrap(), b"int x;\n");
    }

    #[test]
    fn test_copy_flat_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("a.h"), b"stale").unwrap();
        fs::write(temp.path().join("a.h"), b"fresh").unwrap();

        copy_flat(&temp.path().join("a.h"), &dest).unwrap();

        assert_eq!(fs::read(dest.join("a.h")).unwrap(), b"fresh");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_flat_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join(OsStr::from_bytes(b"\xff.c"));
        fs::write(&source, b"int x;\n").unwrap();

        let err = copy_flat(&source, temp.path()).unwrap_err();
        assert!(matches!(err, VendorError::NonUtf8Name(ref path) if path == &source));
    }

    #[test]
    fn test_copy_flat_rejects_path_without_name() {
        let temp = tempfile::tempdir().unwrap();

        let err = copy_flat(Path::new("/"), temp.path()).unwrap_err();
        assert!(matches!(err, VendorError::MissingFileName(_)));
    }

    #[test]
    fn test_copy_flat_missing_destination_fails() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.c"), b"").unwrap();

        let err = copy_flat(&temp.path().join("a.c"), &temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, VendorError::Io { .. }));
    }
}
