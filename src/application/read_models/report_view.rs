//! The report handed to a `ReportFormatter`

use super::component_view::{DependencyReportView, SbomCatalogView};
use super::inventory_view::{CommitterView, ProjectView, RepositoryView};
use super::scan_view::{ImportReceiptView, ScanDetailView, ScanSummaryView};
use crate::repository_insights::services::Page;
use serde::Serialize;

/// Every report the CLI can render
///
/// Serialized untagged: the JSON output is the inner view itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportView {
    ScanList(Vec<ScanSummaryView>),
    ScanDetail(ScanDetailView),
    ScanDeleted {
        deleted: String,
        remaining: Vec<ScanSummaryView>,
    },
    ImportReceipt(ImportReceiptView),
    Repositories(Page<RepositoryView>),
    Projects(Page<ProjectView>),
    Committers(Page<CommitterView>),
    Components(Vec<String>),
    Versions {
        component: String,
        versions: Vec<String>,
    },
    Catalog(SbomCatalogView),
    Dependencies(DependencyReportView),
}
