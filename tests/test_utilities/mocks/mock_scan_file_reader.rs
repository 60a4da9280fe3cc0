use observes::shared::error::ImportError;
use observes::prelude::*;
use std::path::Path;

/// Mock ScanFileReader returning fixed content
pub struct MockScanFileReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockScanFileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ScanFileReader for MockScanFileReader {
    fn read_scan_file(&self, path: &Path) -> std::result::Result<String, ImportError> {
        if self.should_fail {
            return Err(ImportError::FileRead {
                path: path.to_path_buf(),
                details: "Mock scan file read failure".to_string(),
            });
        }
        Ok(self.content.clone())
    }
}
