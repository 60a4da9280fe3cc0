use crate::application::dto::{ImportOutcome, ImportReceipt, ImportRequest};
use crate::application::read_models::ScanViewBuilder;
use crate::ports::outbound::{
    ConfirmationPrompt, PreferenceStore, ProgressReporter, ScanFileReader, ScanStore,
    UploadDecision,
};
use crate::scan_import::services::{ScanNormalizer, ScanValidator};
use crate::shared::error::ImportError;
use crate::shared::Result;
use serde_json::Value;

/// Warning shown before a scan is uploaded
pub const UPLOAD_WARNING: &str = "Scan results contain organisation data such as project, \
repository and committer names. They will be stored unencrypted in the local scan store.";

/// ImportScanUseCase - reads, validates, normalizes and stores an uploaded scan
///
/// # Type Parameters
/// * `FR` - ScanFileReader implementation
/// * `S` - ScanStore implementation
/// * `PS` - PreferenceStore implementation
/// * `CP` - ConfirmationPrompt implementation
/// * `PR` - ProgressReporter implementation
pub struct ImportScanUseCase<FR, S, PS, CP, PR> {
    file_reader: FR,
    scan_store: S,
    preference_store: PS,
    confirmation_prompt: CP,
    progress_reporter: PR,
}

impl<FR, S, PS, CP, PR> ImportScanUseCase<FR, S, PS, CP, PR>
where
    FR: ScanFileReader,
    S: ScanStore,
    PS: PreferenceStore,
    CP: ConfirmationPrompt,
    PR: ProgressReporter,
{
    pub fn new(
        file_reader: FR,
        scan_store: S,
        preference_store: PS,
        confirmation_prompt: CP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            file_reader,
            scan_store,
            preference_store,
            confirmation_prompt,
            progress_reporter,
        }
    }

    /// Runs the whole import: confirmation, file read, then `ingest`
    ///
    /// # Errors
    /// `ImportError`s are returned unchanged inside the `anyhow::Error` so the
    /// caller can map them to their exit code. Preference and prompt failures
    /// are returned as-is.
    pub fn execute(&self, request: ImportRequest) -> Result<ImportOutcome> {
        // Step 1: Pre-upload warning
        if !self.confirmed(&request)? {
            self.progress_reporter.report("🚫 Import cancelled");
            return Ok(ImportOutcome::Cancelled);
        }

        // Step 2: Read the file
        self.progress_reporter.report(&format!(
            "📖 Reading scan file: {}",
            request.path.display()
        ));
        let text = self.file_reader.read_scan_file(&request.path)?;

        // Step 3: Parse, validate, normalize, store
        let receipt = self.ingest(&text)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Imported scan {} ({} scan(s) stored)",
            receipt.id, receipt.stored_scans
        ));
        Ok(ImportOutcome::Imported(receipt))
    }

    /// Parses, validates, normalizes and persists one scan file's text
    ///
    /// After a successful `add_scan` the scan list is re-read from the store;
    /// nothing is kept in memory between imports. Importing the same text
    /// twice calls `add_scan` twice.
    pub fn ingest(&self, text: &str) -> std::result::Result<ImportReceipt, ImportError> {
        let raw: Value = serde_json::from_str(text).map_err(|e| ImportError::Parse {
            details: e.to_string(),
        })?;

        let result = ScanValidator::validate(raw)?;
        let scan = ScanNormalizer::normalize(result);

        let id = self
            .scan_store
            .add_scan(&scan)
            .map_err(|e| ImportError::Persistence {
                details: e.to_string(),
            })?;

        let stored = self
            .scan_store
            .list_scans()
            .map_err(|e| ImportError::Persistence {
                details: e.to_string(),
            })?;

        Ok(ImportReceipt {
            id,
            organisation: ScanViewBuilder::organisation_name(&scan),
            stored_scans: stored.scans.len(),
        })
    }

    fn confirmed(&self, request: &ImportRequest) -> Result<bool> {
        if request.skip_confirmation || self.preference_store.dont_ask_again_upload_warning()? {
            return Ok(true);
        }

        match self.confirmation_prompt.confirm_upload(UPLOAD_WARNING)? {
            UploadDecision::Proceed => Ok(true),
            UploadDecision::ProceedAndDontAskAgain => {
                self.preference_store
                    .set_dont_ask_again_upload_warning(true)?;
                Ok(true)
            }
            UploadDecision::Cancel => Ok(false),
        }
    }
}
