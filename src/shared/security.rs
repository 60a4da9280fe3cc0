use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an uploaded scan or stored scan file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum length of an identifier used as a file name or URL segment
pub const MAX_SEGMENT_LENGTH: usize = 255;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a single path segment coming from untrusted data
///
/// Scan ids become file names and SBOM component/version names become URL
/// path segments, so neither may escape its parent.
///
/// # Errors
/// Returns an error if the segment is empty, too long, contains path
/// separators, `..`, URL-unsafe characters, or control characters
pub fn validate_path_segment(segment: &str, segment_type: &str) -> Result<()> {
    if segment.trim().is_empty() {
        anyhow::bail!("{} must not be empty", segment_type);
    }

    if segment.len() > MAX_SEGMENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            segment_type,
            segment.len(),
            MAX_SEGMENT_LENGTH
        );
    }

    if segment.contains('/') || segment.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            segment_type
        );
    }

    if segment.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", segment_type);
    }

    if segment.contains('#') || segment.contains('?') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", segment_type);
    }

    if segment.chars().any(char::is_control) {
        anyhow::bail!("Security: {} contains control characters", segment_type);
    }

    Ok(())
}
