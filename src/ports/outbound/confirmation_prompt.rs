use crate::shared::Result;

/// Answer to the pre-upload warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDecision {
    Proceed,
    /// Proceed, and skip the warning on future uploads
    ProceedAndDontAskAgain,
    Cancel,
}

/// ConfirmationPrompt port asking the user before a scan is uploaded
pub trait ConfirmationPrompt {
    fn confirm_upload(&self, message: &str) -> Result<UploadDecision>;
}
