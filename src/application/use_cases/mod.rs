/// Use cases module containing application business logic orchestration
mod explore_sbom;
mod import_scan;
mod inventory_report;
mod manage_scans;
mod sbom_explorer;

pub use explore_sbom::{ExploreSbomUseCase, MAX_CONCURRENT_VERSION_LISTS};
pub use import_scan::{ImportScanUseCase, UPLOAD_WARNING};
pub use inventory_report::InventoryReportUseCase;
pub use manage_scans::ManageScansUseCase;
pub use sbom_explorer::SbomExplorer;
