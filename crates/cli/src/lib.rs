use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vendorprep_core::VendorLayout;

#[derive(Parser)]
#[command(
    name = "vendorprep",
    version,
    about = "Vendor BearSSL sources into a MoonBit package as native stubs",
    long_about = "Copies every .c and .h file from src/bearssl/{src,inc} flat into src/, \
                  rewrites the native-stub field of src/moon.pkg.json and regenerates \
                  src/.gitignore with the copied file names."
)]
pub struct Cli {
    /// Path to the project root. Defaults to current directory.
    #[arg(value_name = "PROJECT_PATH")]
    pub path: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    vendorprep_core::logging::init_logging();
    execute(cli)
}

/// Resolves the project root and vendors into it.
pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let layout = VendorLayout::new(&root);

    info!("Vendoring BearSSL in {}...", root.display());
    let report = vendorprep_core::run(&layout)?;
    info!(
        "Done: {} file(s) copied, {} native stub(s), {} duplicate name(s)",
        report.copied,
        report.native_stub.len(),
        report.duplicates.len()
    );

    Ok(())
}
