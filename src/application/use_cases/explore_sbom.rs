use super::SbomExplorer;
use crate::application::dto::DependencyQuery;
use crate::application::read_models::{
    CatalogEntryView, ComponentView, DependencyNodeView, DependencyReportView,
    DirectDependencyView, SbomCatalogView,
};
use crate::ports::outbound::{ProgressReporter, SbomRepository};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// Maximum number of version lists fetched concurrently for the catalog
pub const MAX_CONCURRENT_VERSION_LISTS: usize = 8;

/// ExploreSbomUseCase - browses SBOMs and resolves their dependencies
///
/// # Type Parameters
/// * `R` - SbomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreSbomUseCase<R, PR> {
    sbom_repository: R,
    progress_reporter: PR,
}

impl<R, PR> ExploreSbomUseCase<R, PR>
where
    R: SbomRepository,
    PR: ProgressReporter,
{
    pub fn new(sbom_repository: R, progress_reporter: PR) -> Self {
        Self {
            sbom_repository,
            progress_reporter,
        }
    }

    pub async fn components(&self) -> Result<Vec<String>> {
        self.progress_reporter.report("🔍 Listing SBOM components...");
        Ok(self.sbom_repository.list_components().await?)
    }

    pub async fn versions(&self, component: &str) -> Result<Vec<String>> {
        self.progress_reporter
            .report(&format!("🔍 Listing versions of {}...", component));
        Ok(self.sbom_repository.list_versions(component).await?)
    }

    /// Lists every component with its versions
    ///
    /// Version lists are fetched concurrently. The first failed fetch aborts
    /// the catalog with that error; fetches still in flight are dropped.
    pub async fn catalog(&self) -> Result<SbomCatalogView> {
        let components = self.components().await?;
        let total = components.len();

        let mut fetches = stream::iter(components)
            .map(|component| async move {
                let versions = self.sbom_repository.list_versions(&component).await;
                (component, versions)
            })
            .buffer_unordered(MAX_CONCURRENT_VERSION_LISTS);

        let mut entries = Vec::with_capacity(total);
        let mut done = 0;
        while let Some((component, versions)) = fetches.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some(&component));
            entries.push(CatalogEntryView {
                component,
                versions: versions?,
            });
        }

        entries.sort_by(|a, b| a.component.cmp(&b.component));
        self.progress_reporter
            .report_completion(&format!("✅ Listed {} component(s)", entries.len()));

        Ok(SbomCatalogView { entries })
    }

    /// Opens the requested SBOM in `explorer` and builds the dependency report
    ///
    /// The document is fetched only when a different `(component, version)`
    /// is requested; re-opening the current one reuses its cached trees.
    pub async fn dependencies(
        &self,
        query: &DependencyQuery,
        explorer: &mut SbomExplorer,
    ) -> Result<DependencyReportView> {
        if !explorer.is_selected(&query.component, &query.version) {
            self.progress_reporter.report(&format!(
                "📥 Fetching SBOM for {} {}...",
                query.component, query.version
            ));
            let document = self
                .sbom_repository
                .fetch_sbom(&query.component, &query.version)
                .await?;
            explorer.select(&query.component, &query.version, document);
        }

        let requested: Vec<String> = if query.expand_all {
            explorer
                .direct_dependencies()
                .iter()
                .map(|c| c.bom_ref.clone())
                .collect()
        } else {
            query.expand.clone()
        };
        for bom_ref in &requested {
            if explorer.expand(bom_ref).is_none() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: '{}' is not a direct dependency and was not expanded",
                    bom_ref
                ));
            }
        }

        let direct_dependencies = explorer
            .direct_dependencies()
            .iter()
            .map(|component| DirectDependencyView {
                component: ComponentView::from(component),
                children: explorer
                    .expanded(&component.bom_ref)
                    .map(|nodes| nodes.iter().map(DependencyNodeView::from).collect()),
            })
            .collect();

        Ok(DependencyReportView {
            component: query.component.clone(),
            version: query.version.clone(),
            root_reference: explorer.root_reference().map(str::to_string),
            direct_dependencies,
        })
    }
}
