use crate::application::read_models::{ScanDetailView, ScanSummaryView, ScanViewBuilder};
use crate::ports::outbound::{ProgressReporter, ScanStore};
use crate::repository_insights::services::{InventoryExtractor, RepositoryClassifier};
use crate::scan_import::domain::Scan;
use crate::shared::error::ObservesError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// ManageScansUseCase - lists, shows and deletes stored scans
///
/// The store owns the scan collection. Every mutation is an explicit store
/// call followed by a fresh `list_scans`.
pub struct ManageScansUseCase<S, PR> {
    scan_store: S,
    progress_reporter: PR,
}

impl<S, PR> ManageScansUseCase<S, PR>
where
    S: ScanStore,
    PR: ProgressReporter,
{
    pub fn new(scan_store: S, progress_reporter: PR) -> Self {
        Self {
            scan_store,
            progress_reporter,
        }
    }

    /// Summaries of every readable scan; unreadable files are reported
    pub fn list(&self) -> Result<Vec<ScanSummaryView>> {
        let listing = self.scan_store.list_scans()?;
        for unreadable in &listing.unreadable {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping unreadable scan file {}: {}",
                unreadable.path.display(),
                unreadable.reason
            ));
        }
        Ok(listing.scans.iter().map(ScanViewBuilder::summary).collect())
    }

    pub fn show(
        &self,
        id: &str,
        classifier: &RepositoryClassifier,
        now: DateTime<Utc>,
    ) -> Result<ScanDetailView> {
        let scan = self.load(id)?;
        for skipped in InventoryExtractor::extract_projects(&scan).skipped {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", skipped));
        }
        Ok(ScanViewBuilder::detail(&scan, classifier, now))
    }

    /// Deletes a scan and returns the refreshed scan list
    pub fn delete(&self, id: &str) -> Result<Vec<ScanSummaryView>> {
        if self.scan_store.get_scan(id)?.is_none() {
            return Err(ObservesError::ScanNotFound { id: id.to_string() }.into());
        }

        self.scan_store.delete_scan(id)?;
        self.progress_reporter
            .report(&format!("🗑️  Deleted scan {}", id));

        self.list()
    }

    pub fn load(&self, id: &str) -> Result<Scan> {
        self.scan_store
            .get_scan(id)?
            .ok_or_else(|| ObservesError::ScanNotFound { id: id.to_string() }.into())
    }
}
