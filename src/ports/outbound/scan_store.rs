use crate::scan_import::domain::Scan;
use crate::shared::Result;
use std::path::PathBuf;

/// A stored scan file that could not be read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableScan {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of listing the store: the readable scans plus the files skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanListing {
    /// Ordered by id
    pub scans: Vec<Scan>,
    pub unreadable: Vec<UnreadableScan>,
}

/// ScanStore port - the persistence collaborator owning imported scans
///
/// The store is the single owner of the scan collection. Callers never
/// mutate a local copy of it; after a change they re-read with `list_scans`.
pub trait ScanStore {
    /// Persists a scan and returns the id it is stored under
    ///
    /// De-duplication by id is the store's policy. Every scan returned by
    /// `list_scans` afterwards carries that id.
    fn add_scan(&self, scan: &Scan) -> Result<String>;

    /// Deletes a stored scan
    ///
    /// # Errors
    /// Returns an error if no scan with this id exists
    fn delete_scan(&self, id: &str) -> Result<()>;

    /// All stored scans, ordered by id
    ///
    /// A corrupt file does not fail the listing; it is returned in
    /// `unreadable` for the caller to report.
    fn list_scans(&self) -> Result<ScanListing>;

    fn get_scan(&self, id: &str) -> Result<Option<Scan>>;
}
