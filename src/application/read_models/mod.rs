//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving a denormalized representation of scans,
//! inventory and SBOM data for reports. They are rebuilt for every report
//! and never persisted.

pub mod component_view;
pub mod inventory_view;
pub mod report_view;
pub mod scan_view;
pub mod scan_view_builder;

pub use component_view::{
    CatalogEntryView, ComponentView, DependencyNodeView, DependencyReportView,
    DirectDependencyView, SbomCatalogView,
};
pub use inventory_view::{CommitterView, ProjectView, RepositoryView};
pub use report_view::ReportView;
pub use scan_view::{ImportReceiptView, ScanCounts, ScanDetailView, ScanSummaryView, StateCounts};
pub use scan_view_builder::ScanViewBuilder;
