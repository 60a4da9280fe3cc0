use async_trait::async_trait;
use observes::prelude::*;
use observes::shared::error::FetchError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory SbomRepository keyed by component and version
#[derive(Default, Clone)]
pub struct MockSbomRepository {
    documents: BTreeMap<String, BTreeMap<String, SbomDocument>>,
    failing_components: Vec<String>,
    pub fetch_calls: Arc<Mutex<usize>>,
}

impl MockSbomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sbom(mut self, component: &str, version: &str, document: SbomDocument) -> Self {
        self.documents
            .entry(component.to_string())
            .or_default()
            .insert(version.to_string(), document);
        self
    }

    /// Listing this component's versions fails
    pub fn with_failing_component(mut self, component: &str) -> Self {
        self.documents.entry(component.to_string()).or_default();
        self.failing_components.push(component.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

#[async_trait]
impl SbomRepository for MockSbomRepository {
    async fn list_components(&self) -> std::result::Result<Vec<String>, FetchError> {
        Ok(self.documents.keys().cloned().collect())
    }

    async fn list_versions(&self, component: &str) -> std::result::Result<Vec<String>, FetchError> {
        if self.failing_components.iter().any(|c| c == component) {
            return Err(FetchError::VersionList {
                component: component.to_string(),
                details: "Mock version list failure".to_string(),
            });
        }
        Ok(self
            .documents
            .get(component)
            .map(|versions| versions.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_sbom(
        &self,
        component: &str,
        version: &str,
    ) -> std::result::Result<SbomDocument, FetchError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.documents
            .get(component)
            .and_then(|versions| versions.get(version))
            .cloned()
            .ok_or_else(|| FetchError::SbomNotFound {
                component: component.to_string(),
                version: version.to_string(),
                status: 404,
            })
    }
}
