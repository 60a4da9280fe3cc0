use std::path::PathBuf;

/// ImportRequest - request DTO for importing a scan file
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Path to the scanner's JSON output
    pub path: PathBuf,
    /// Skip the pre-upload warning for this import only
    pub skip_confirmation: bool,
}

impl ImportRequest {
    pub fn new(path: PathBuf, skip_confirmation: bool) -> Self {
        Self {
            path,
            skip_confirmation,
        }
    }
}

/// ImportReceipt - what an accepted import produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReceipt {
    /// Id the scan is stored under
    pub id: String,
    pub organisation: Option<String>,
    /// Size of the scan list re-read from the store after the import
    pub stored_scans: usize,
}

/// ImportOutcome - result of the import flow including the confirmation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportReceipt),
    /// The user declined the upload warning; nothing was stored
    Cancelled,
}
