use crate::ports::outbound::ScanFileReader;
use crate::shared::error::ImportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading uploaded scan files
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        if fs::symlink_metadata(path).is_err() {
            anyhow::bail!("File does not exist");
        }

        validate_regular_file(path, "scan file")?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read scan file metadata: {}", e))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read scan file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFileReader for FileSystemReader {
    fn read_scan_file(&self, path: &Path) -> std::result::Result<String, ImportError> {
        self.safe_read_file(path)
            .map_err(|e| ImportError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            })
    }
}
