use crate::sbom_analysis::domain::SbomDocument;
use crate::shared::error::FetchError;
use async_trait::async_trait;

/// SbomRepository port for retrieving SBOM documents
///
/// SBOMs are organised by component, then version; each version holds
/// exactly one document.
///
/// # Async Support
/// Methods are async so that version lists can be fetched concurrently.
#[async_trait]
pub trait SbomRepository: Send + Sync {
    /// Lists the component names, sorted
    async fn list_components(&self) -> Result<Vec<String>, FetchError>;

    /// Lists the versions of one component, sorted
    async fn list_versions(&self, component: &str) -> Result<Vec<String>, FetchError>;

    /// Fetches the SBOM of one component version
    ///
    /// # Errors
    /// Returns `FetchError::SbomRequest` when the request fails in transport,
    /// `FetchError::SbomNotFound` for a non-success response and
    /// `FetchError::InvalidDocument` when the body is not an SBOM
    async fn fetch_sbom(&self, component: &str, version: &str)
        -> Result<SbomDocument, FetchError>;
}
