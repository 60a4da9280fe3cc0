use crate::ports::outbound::SbomRepository;
use crate::sbom_analysis::domain::SbomDocument;
use crate::shared::error::FetchError;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "main";

/// File name of the SBOM inside each version directory
const SBOM_FILE_NAME: &str = "sbom.json";

/// Location of the SBOM tree in a GitHub repository
///
/// Layout: `<root_path>/<component>/<version>/sbom.json` on `branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSbomSource {
    pub api_base_url: String,
    pub raw_base_url: String,
    pub owner: String,
    pub repository: String,
    pub branch: String,
    /// Slash-separated directory holding the component directories; may be empty
    pub root_path: String,
}

impl GitHubSbomSource {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            owner: owner.into(),
            repository: repository.into(),
            branch: DEFAULT_BRANCH.to_string(),
            root_path: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    entry_type: String,
}

/// GitHubSbomRepository adapter reading SBOMs from a GitHub repository
///
/// Directories are listed through the contents API; SBOM files are
/// downloaded from the raw file host. No retries: a failed request is
/// reported to the user, who re-runs the command.
pub struct GitHubSbomRepository {
    client: reqwest::Client,
    source: GitHubSbomSource,
}

impl GitHubSbomRepository {
    pub fn new(source: GitHubSbomSource) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("observes/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, source })
    }

    fn validate_segment(segment: &str, segment_type: &str) -> std::result::Result<(), FetchError> {
        validate_path_segment(segment, segment_type).map_err(|e| FetchError::InvalidSegment {
            segment_type: segment_type.to_string(),
            value: segment.to_string(),
            reason: e.to_string(),
        })
    }

    /// Encoded root path segments followed by the given (already validated) segments
    fn path(&self, segments: &[&str]) -> String {
        self.source
            .root_path
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(segments.iter().copied())
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub(crate) fn contents_url(&self, segments: &[&str]) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.source.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&self.source.owner),
            urlencoding::encode(&self.source.repository),
            self.path(segments),
            urlencoding::encode(&self.source.branch)
        )
    }

    pub(crate) fn sbom_url(&self, component: &str, version: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.source.raw_base_url.trim_end_matches('/'),
            urlencoding::encode(&self.source.owner),
            urlencoding::encode(&self.source.repository),
            urlencoding::encode(&self.source.branch),
            self.path(&[component, version, SBOM_FILE_NAME])
        )
    }

    /// Lists the sub-directory names of a directory, sorted
    async fn list_directories(&self, segments: &[&str]) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.contents_url(segments))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }

        let entries: Vec<ContentEntry> = response.json().await?;
        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.entry_type == "dir")
            .map(|entry| entry.name)
            .collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl SbomRepository for GitHubSbomRepository {
    async fn list_components(&self) -> std::result::Result<Vec<String>, FetchError> {
        self.list_directories(&[])
            .await
            .map_err(|e| FetchError::ComponentList {
                details: e.to_string(),
            })
    }

    async fn list_versions(&self, component: &str) -> std::result::Result<Vec<String>, FetchError> {
        Self::validate_segment(component, "component name")?;

        self.list_directories(&[component])
            .await
            .map_err(|e| FetchError::VersionList {
                component: component.to_string(),
                details: e.to_string(),
            })
    }

    async fn fetch_sbom(
        &self,
        component: &str,
        version: &str,
    ) -> std::result::Result<SbomDocument, FetchError> {
        Self::validate_segment(component, "component name")?;
        Self::validate_segment(version, "version")?;

        let request_failed = |e: reqwest::Error| FetchError::SbomRequest {
            component: component.to_string(),
            version: version.to_string(),
            details: e.to_string(),
        };

        let response = self
            .client
            .get(self.sbom_url(component, version))
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::SbomNotFound {
                component: component.to_string(),
                version: version.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_failed)?;
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidDocument {
            component: component.to_string(),
            version: version.to_string(),
            details: e.to_string(),
        })
    }
}
