/// Mock implementations for testing
mod mock_confirmation_prompt;
mod mock_preference_store;
mod mock_progress_reporter;
mod mock_sbom_repository;
mod mock_scan_file_reader;
mod mock_scan_store;

pub use mock_confirmation_prompt::MockConfirmationPrompt;
pub use mock_preference_store::MockPreferenceStore;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_repository::MockSbomRepository;
pub use mock_scan_file_reader::MockScanFileReader;
pub use mock_scan_store::MockScanStore;
