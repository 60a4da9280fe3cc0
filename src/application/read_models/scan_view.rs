//! Scan view structs for list, detail and import reports

use crate::application::dto::ImportReceipt;
use crate::repository_insights::services::LanguageShare;
use serde::Serialize;

/// Entity counts of one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounts {
    pub projects: usize,
    pub repositories: usize,
    pub builds: usize,
    pub build_definitions: usize,
    pub commits: usize,
    pub committers: usize,
    pub artifacts: usize,
    pub build_service_accounts: usize,
}

/// One row of the scan list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummaryView {
    pub id: String,
    pub organisation: Option<String>,
    pub scan_start: Option<String>,
    pub scan_end: Option<String>,
    pub counts: ScanCounts,
}

/// Repository counts per classification and flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub active: usize,
    pub stale: usize,
    pub dormant: usize,
    pub disabled: usize,
    pub empty: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanDetailView {
    #[serde(flatten)]
    pub summary: ScanSummaryView,
    pub states: StateCounts,
    pub languages: Vec<LanguageShare>,
}

/// Result of a successful import
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReceiptView {
    pub id: String,
    pub organisation: Option<String>,
    /// Number of scans in the store after the refresh
    pub stored_scans: usize,
}

impl From<ImportReceipt> for ImportReceiptView {
    fn from(receipt: ImportReceipt) -> Self {
        Self {
            id: receipt.id,
            organisation: receipt.organisation,
            stored_scans: receipt.stored_scans,
        }
    }
}
