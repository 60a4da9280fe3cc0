//! observes - governance scan and SBOM inspection
//!
//! This library imports the JSON scan results produced by an Azure DevOps
//! governance scanner, classifies the scanned repositories by activity, and
//! resolves direct and transitive dependencies from CycloneDX SBOMs.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_import`, `repository_insights`, `sbom_analysis`):
//!   Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use observes::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let use_case = ImportScanUseCase::new(
//!     FileSystemReader::new(),
//!     JsonScanStore::new(".observes"),
//!     JsonPreferenceFile::new(".observes"),
//!     StdinConfirmationPrompt::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ImportRequest::new(PathBuf::from("scan.json"), true);
//! if let ImportOutcome::Imported(receipt) = use_case.execute(request)? {
//!     println!("Stored scan {}", receipt.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod repository_insights;
pub mod sbom_analysis;
pub mod scan_import;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdinConfirmationPrompt};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonPreferenceFile, JsonScanStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{GitHubSbomRepository, GitHubSbomSource};
    pub use crate::application::dto::{
        DependencyQuery, ImportOutcome, ImportReceipt, ImportRequest, InventoryQuery, OutputFormat,
    };
    pub use crate::application::read_models::ReportView;
    pub use crate::application::use_cases::{
        ExploreSbomUseCase, ImportScanUseCase, InventoryReportUseCase, ManageScansUseCase,
        SbomExplorer,
    };
    pub use crate::ports::outbound::{
        ConfirmationPrompt, OutputPresenter, PreferenceStore, ProgressReporter, ReportFormatter,
        SbomRepository, ScanFileReader, ScanListing, ScanStore, UnreadableScan, UploadDecision,
    };
    pub use crate::repository_insights::domain::{ActivityState, RepositorySnapshot};
    pub use crate::repository_insights::policies::StalenessThresholds;
    pub use crate::repository_insights::services::{Page, Paginator, RepositoryClassifier};
    pub use crate::sbom_analysis::domain::{Component, DependencyNode, SbomDocument};
    pub use crate::sbom_analysis::services::{DependencyTreeResolver, DirectDependencyResolver};
    pub use crate::scan_import::domain::{Scan, ScanResult};
    pub use crate::scan_import::services::{ScanNormalizer, ScanValidator};
    pub use crate::shared::Result;
}
