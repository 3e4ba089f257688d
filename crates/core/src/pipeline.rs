//! The vendoring run: scan, copy, build lists, rewrite manifest and ignore file.
//!
//! Every step aborts the run on error. Files already copied stay in place, and
//! the manifest and ignore file are only touched once every copy succeeded.

use crate::error::Result;
use crate::ignore::write_ignore_file;
use crate::layout::{HEADER_EXTENSION, SOURCE_EXTENSION, VendorLayout};
use crate::manifest::PackageManifest;
use crate::materialize::copy_flat;
use crate::scanner::scan;
use crate::stubs::{StubListBuilder, StubLists};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorReport {
    pub copied: usize,
    pub native_stub: Vec<String>,
    pub ignored: Vec<String>,
    pub duplicates: Vec<String>,
}

impl From<StubLists> for VendorReport {
    fn from(lists: StubLists) -> Self {
        Self {
            copied: lists.ignored.len(),
            native_stub: lists.native_stub,
            ignored: lists.ignored,
            duplicates: lists.duplicates,
        }
    }
}

pub fn run(layout: &VendorLayout) -> Result<VendorReport> {
    let mut builder = StubListBuilder::new();

    info!(
        "Copying sources from {} into {}",
        layout.library_source_dir.display(),
        layout.dest_dir.display()
    );
    for source in scan(&layout.library_source_dir, SOURCE_EXTENSION)? {
        builder.record_source(copy_flat(&source, &layout.dest_dir)?);
    }

    for dir in [&layout.library_source_dir, &layout.library_include_dir] {
        info!("Copying headers from {}", dir.display());
        for header in scan(dir, HEADER_EXTENSION)? {
            builder.record_header(copy_flat(&header, &layout.dest_dir)?);
        }
    }

    let lists = builder.finish(&layout.sentinel);
    for name in &lists.duplicates {
        warn!("{} was copied more than once; the last copy wins", name);
    }

    let mut manifest = PackageManifest::load(&layout.manifest_path)?;
    manifest.set_native_stub(&lists.native_stub);
    manifest.save()?;
    info!(
        "Wrote {} native stub(s) to {}",
        lists.native_stub.len(),
        manifest.path().display()
    );

    write_ignore_file(&layout.ignore_path, &lists.ignored)?;
    info!(
        "Wrote {} ignored file(s) to {}",
        lists.ignored.len(),
        layout.ignore_path.display()
    );

    Ok(lists.into())
}
