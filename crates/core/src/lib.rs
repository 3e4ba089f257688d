pub mod error;
pub mod ignore;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod materialize;
pub mod pipeline;
pub mod scanner;
pub mod stubs;

pub use error::{Result, VendorError};
pub use layout::VendorLayout;
pub use pipeline::{VendorReport, run};
