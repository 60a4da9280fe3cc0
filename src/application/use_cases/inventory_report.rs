use crate::application::dto::InventoryQuery;
use crate::application::read_models::{CommitterView, ProjectView, RepositoryView};
use crate::ports::outbound::{ProgressReporter, ScanStore};
use crate::repository_insights::domain::{ActivityState, ProjectSnapshot};
use crate::repository_insights::services::{
    InventoryExtractor, NameFilter, Page, Paginator, RepositoryClassifier,
};
use crate::scan_import::domain::Scan;
use crate::shared::error::ObservesError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// InventoryReportUseCase - paged, filterable repository, project and
/// committer reports over one stored scan
///
/// Filtering always runs before paging; classifications are evaluated at
/// the `now` passed in. Scan entries that cannot be read are left out and
/// reported as warnings.
pub struct InventoryReportUseCase<S, PR> {
    scan_store: S,
    progress_reporter: PR,
    classifier: RepositoryClassifier,
    default_page_size: usize,
}

impl<S, PR> InventoryReportUseCase<S, PR>
where
    S: ScanStore,
    PR: ProgressReporter,
{
    pub fn new(
        scan_store: S,
        progress_reporter: PR,
        classifier: RepositoryClassifier,
        default_page_size: usize,
    ) -> Self {
        Self {
            scan_store,
            progress_reporter,
            classifier,
            default_page_size,
        }
    }

    pub fn repositories(
        &self,
        scan_id: &str,
        query: &InventoryQuery,
        now: DateTime<Utc>,
    ) -> Result<Page<RepositoryView>> {
        let scan = self.load(scan_id)?;
        let filter = NameFilter::new(query.filter.as_deref());

        let mut rows: Vec<RepositoryView> = self
            .projects_of(&scan)
            .into_iter()
            .flat_map(|project| {
                let project_name = project.name;
                project
                    .repositories
                    .into_iter()
                    .map(move |repository| (project_name.clone(), repository))
            })
            .filter(|(_, repository)| filter.matches(&repository.name))
            .map(|(project, repository)| {
                let flags = self.classifier.flags(&repository);
                RepositoryView {
                    project,
                    state: self.classifier.classify(&repository, now),
                    disabled: flags.disabled,
                    empty: flags.empty,
                    size: repository.size,
                    last_commit: repository.stats.last_commit_date,
                    name: repository.name,
                }
            })
            .filter(|row| query.state.is_none_or(|state| row.state == state))
            .collect();

        rows.sort_by(|a, b| a.project.cmp(&b.project).then_with(|| a.name.cmp(&b.name)));
        self.paginate(rows, query)
    }

    pub fn projects(
        &self,
        scan_id: &str,
        query: &InventoryQuery,
        now: DateTime<Utc>,
    ) -> Result<Page<ProjectView>> {
        let scan = self.load(scan_id)?;
        let filter = NameFilter::new(query.filter.as_deref());

        let rows: Vec<ProjectView> = self
            .projects_of(&scan)
            .into_iter()
            .filter(|project| filter.matches(&project.name))
            .map(|project| ProjectView {
                inactive_repositories: project
                    .repositories
                    .iter()
                    .filter(|r| self.classifier.classify(r, now) != ActivityState::Active)
                    .count(),
                repositories: project.repositories.len(),
                name: project.name,
            })
            .collect();

        self.paginate(rows, query)
    }

    pub fn committers(&self, scan_id: &str, query: &InventoryQuery) -> Result<Page<CommitterView>> {
        let scan = self.load(scan_id)?;
        let filter = NameFilter::new(query.filter.as_deref());

        let rows: Vec<CommitterView> = InventoryExtractor::committers(&scan)
            .into_iter()
            .filter(|committer| filter.matches(&committer.name))
            .map(|committer| CommitterView {
                name: committer.name,
                commit_count: committer.commit_count,
            })
            .collect();

        self.paginate(rows, query)
    }

    fn projects_of(&self, scan: &Scan) -> Vec<ProjectSnapshot> {
        let extraction = InventoryExtractor::extract_projects(scan);
        for skipped in &extraction.skipped {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", skipped));
        }
        extraction.projects
    }

    fn load(&self, scan_id: &str) -> Result<Scan> {
        self.scan_store.get_scan(scan_id)?.ok_or_else(|| {
            ObservesError::ScanNotFound {
                id: scan_id.to_string(),
            }
            .into()
        })
    }

    fn paginate<T>(&self, rows: Vec<T>, query: &InventoryQuery) -> Result<Page<T>> {
        let paginator = Paginator::new(query.page_size.unwrap_or(self.default_page_size))?;
        Ok(paginator.paginate(rows, query.page))
    }
}
