//! Builder for scan list and detail views
//!
//! Transforms a stored `Scan` into the denormalized views shown by
//! `scans list` and `scans show`.

use super::scan_view::{ScanCounts, ScanDetailView, ScanSummaryView, StateCounts};
use crate::repository_insights::domain::ActivityState;
use crate::repository_insights::services::{
    InventoryExtractor, LanguageBreakdown, RepositoryClassifier,
};
use crate::scan_import::domain::Scan;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub struct ScanViewBuilder;

impl ScanViewBuilder {
    /// Builds the list row of a scan
    pub fn summary(scan: &Scan) -> ScanSummaryView {
        let projects = InventoryExtractor::projects(scan);
        let repositories = projects.iter().map(|p| p.repositories.len()).sum();

        ScanSummaryView {
            id: scan.id_key().unwrap_or_default(),
            organisation: Self::organisation_name(scan),
            scan_start: scan.scan.start.as_ref().map(Self::render_timestamp),
            scan_end: scan.scan.end.as_ref().map(Self::render_timestamp),
            counts: ScanCounts {
                projects: projects.len(),
                repositories,
                builds: Self::collection_len(&scan.builds),
                build_definitions: Self::collection_len(&scan.build_definitions),
                commits: Self::collection_len(&scan.commits),
                committers: InventoryExtractor::committers(scan).len(),
                artifacts: Self::collection_len(&scan.artifacts),
                build_service_accounts: Self::collection_len(&scan.build_service_accounts),
            },
        }
    }

    /// Builds the detail view: the summary plus classification counts and
    /// the language breakdown, evaluated at `now`
    pub fn detail(
        scan: &Scan,
        classifier: &RepositoryClassifier,
        now: DateTime<Utc>,
    ) -> ScanDetailView {
        let projects = InventoryExtractor::projects(scan);
        let repositories: Vec<_> = projects.iter().flat_map(|p| &p.repositories).collect();

        let mut states = StateCounts::default();
        for repository in &repositories {
            match classifier.classify(repository, now) {
                ActivityState::Active => states.active += 1,
                ActivityState::Stale => states.stale += 1,
                ActivityState::Dormant => states.dormant += 1,
            }
            let flags = classifier.flags(repository);
            states.disabled += usize::from(flags.disabled);
            states.empty += usize::from(flags.empty);
        }

        ScanDetailView {
            summary: Self::summary(scan),
            states,
            languages: LanguageBreakdown::compute(repositories.iter().copied()),
        }
    }

    /// Organisation display name: `name`, then `login`
    pub fn organisation_name(scan: &Scan) -> Option<String> {
        ["name", "login"]
            .iter()
            .filter_map(|key| scan.organisation.get(key))
            .filter_map(Value::as_str)
            .find(|name| !name.trim().is_empty())
            .map(str::to_string)
    }

    fn render_timestamp(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn collection_len(value: &Value) -> usize {
        match value {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository_insights::policies::StalenessThresholds;
    use crate::scan_import::services::{ScanNormalizer, ScanValidator};
    use chrono::TimeZone;
    use serde_json::json;

    fn scan() -> Scan {
        let raw = json!({
            "id": "scan-1",
            "scan_start": "2024-06-01T00:00:00Z",
            "scan_end": 1717200000,
            "organisation": {"name": "acme"},
            "projects": {
                "p1": {
                    "name": "Payments",
                    "repositories": [
                        {"name": "api", "size": 10, "stats": {
                            "lastCommitDate": "2024-05-20T00:00:00Z",
                            "languages": {"Rust": 300.0, "Shell": 100.0}
                        }},
                        {"name": "legacy", "size": 0, "isDisabled": true}
                    ]
                }
            },
            "build_definitions": [{"id": 1}, {"id": 2}],
            "builds": {"b1": {}},
            "protected_resources": {},
            "commits": [{"sha": "a"}, {"sha": "b"}, {"sha": "c"}],
            "committer_stats": {"dev@acme.io": {"name": "Dev", "commits": 3}}
        });
        ScanNormalizer::normalize(ScanValidator::validate(raw).unwrap())
    }

    #[test]
    fn test_summary_counts() {
        let summary = ScanViewBuilder::summary(&scan());

        assert_eq!(summary.id, "scan-1");
        assert_eq!(summary.organisation.as_deref(), Some("acme"));
        assert_eq!(summary.scan_start.as_deref(), Some("2024-06-01T00:00:00Z"));
        assert_eq!(summary.scan_end.as_deref(), Some("1717200000"));
        assert_eq!(summary.counts.projects, 1);
        assert_eq!(summary.counts.repositories, 2);
        assert_eq!(summary.counts.builds, 1);
        assert_eq!(summary.counts.build_definitions, 2);
        assert_eq!(summary.counts.commits, 3);
        assert_eq!(summary.counts.committers, 1);
        assert_eq!(summary.counts.artifacts, 0);
    }

    #[test]
    fn test_detail_state_counts_and_languages() {
        let classifier = RepositoryClassifier::new(StalenessThresholds::default());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let detail = ScanViewBuilder::detail(&scan(), &classifier, now);

        assert_eq!(detail.states.active, 1);
        assert_eq!(detail.states.dormant, 1);
        assert_eq!(detail.states.disabled, 1);
        assert_eq!(detail.states.empty, 1);
        assert_eq!(detail.languages[0].language, "Rust");
        assert_eq!(detail.languages[0].percentage, 75.0);
    }

    #[test]
    fn test_organisation_name_falls_back_to_login() {
        let mut scan = scan();
        scan.organisation = json!({"login": "acme-corp"});
        assert_eq!(
            ScanViewBuilder::organisation_name(&scan).as_deref(),
            Some("acme-corp")
        );

        scan.organisation = json!({"id": 7});
        assert!(ScanViewBuilder::organisation_name(&scan).is_none());
    }
}
