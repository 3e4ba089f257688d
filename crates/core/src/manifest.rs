//! Read-modify-write access to `moon.pkg.json`.

use crate::error::{Result, VendorError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const NATIVE_STUB_KEY: &str = "native-stub";

/// A loaded package manifest. Key order and every field other than
/// `native-stub` survive a load/save cycle unchanged.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| VendorError::io(path, e))?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        match serde_json::from_str(text)? {
            Value::Object(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            _ => Err(VendorError::ManifestNotObject(path.to_path_buf())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn native_stub(&self) -> Option<&Value> {
        self.fields.get(NATIVE_STUB_KEY)
    }

    /// Replaces the whole `native-stub` field. A missing key is appended.
    pub fn set_native_stub(&mut self, stubs: &[String]) {
        let value = Value::Array(stubs.iter().cloned().map(Value::String).collect());
        self.fields.insert(NATIVE_STUB_KEY.to_string(), value);
    }

    /// 2-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.fields)?;
        text.push('\n');
        Ok(text)
    }

    /// Serializes first, so a failure never truncates the file on disk.
    pub fn save(&self) -> Result<()> {
        let text = self.to_json_string()?;
        fs::write(&self.path, text).map_err(|e| VendorError::io(&self.path, e))
    }
}
