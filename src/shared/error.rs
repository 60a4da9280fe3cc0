use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a rejected upload from an
/// infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The uploaded scan file was rejected (parse, shape, or persistence failure)
    ImportRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, file I/O error, unknown scan, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ImportRejected => write!(f, "Import Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Shape violation found while validating an uploaded scan document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid scan result: '{field}' {reason}")]
    ShapeMismatch { field: String, reason: String },
}

impl ValidationError {
    pub fn shape_mismatch(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::ShapeMismatch {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field (`<root>` for the document itself)
    pub fn field(&self) -> &str {
        match self {
            ValidationError::ShapeMismatch { field, .. } => field,
        }
    }
}

/// Failures of the scan import pipeline.
///
/// All variants are reported through the same user-facing channel; none of
/// them is retried automatically.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to parse scan file as JSON\nDetails: {details}\n\n💡 Hint: Select the JSON file produced by the scanner")]
    Parse { details: String },

    #[error("{0}\n\n💡 Hint: The file must contain organisation, projects, build_definitions, builds and protected_resources objects")]
    ShapeMismatch(#[from] ValidationError),

    #[error("Failed to store scan\nDetails: {details}")]
    Persistence { details: String },

    #[error("Failed to read scan file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },
}

/// Failures while talking to the SBOM source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to list SBOM components\nDetails: {details}")]
    ComponentList { details: String },

    #[error("Failed to list versions of component '{component}'\nDetails: {details}")]
    VersionList { component: String, details: String },

    #[error("SBOM not found for {component} {version} (status {status})")]
    SbomNotFound {
        component: String,
        version: String,
        status: u16,
    },

    #[error("Failed to download SBOM for {component} {version}\nDetails: {details}\n\n💡 Hint: Check your network connection and the configured sbom_source URLs")]
    SbomRequest {
        component: String,
        version: String,
        details: String,
    },

    #[error("Invalid {segment_type} '{value}'\nReason: {reason}")]
    InvalidSegment {
        segment_type: String,
        value: String,
        reason: String,
    },

    #[error("SBOM for {component} {version} is not a valid CycloneDX document\nDetails: {details}")]
    InvalidDocument {
        component: String,
        version: String,
        details: String,
    },
}

/// Infrastructure errors raised by adapters and the CLI.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum ObservesError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Scan not found: {id}\n\n💡 Hint: Run `observes scans list` to see the stored scans")]
    ScanNotFound { id: String },

    #[error("Invalid scan id: {id}\nReason: {reason}")]
    InvalidScanId { id: String, reason: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
