/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod confirmation_prompt;
pub mod output_presenter;
pub mod preference_store;
pub mod progress_reporter;
pub mod report_formatter;
pub mod sbom_repository;
pub mod scan_file_reader;
pub mod scan_store;

pub use confirmation_prompt::{ConfirmationPrompt, UploadDecision};
pub use output_presenter::OutputPresenter;
pub use preference_store::PreferenceStore;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use sbom_repository::SbomRepository;
pub use scan_file_reader::ScanFileReader;
pub use scan_store::{ScanListing, ScanStore, UnreadableScan};
