use crate::shared::error::ImportError;
use std::path::Path;

/// ScanFileReader port for reading an uploaded scan file
pub trait ScanFileReader {
    /// Reads the scan file as UTF-8 text
    ///
    /// # Errors
    /// Returns `ImportError::FileRead` if the file is missing or unreadable,
    /// is a symbolic link, or exceeds the size limit
    fn read_scan_file(&self, path: &Path) -> Result<String, ImportError>;
}
