pub mod scan;
pub mod scan_result;

pub use scan::{Scan, ScanWindow};
pub use scan_result::{ScanResult, REQUIRED_FIELDS};
