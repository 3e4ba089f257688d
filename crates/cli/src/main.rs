fn main() -> Result<(), Box<dyn std::error::Error>> {
    vendorprep_cli::run()
}
