use crate::repository_insights::domain::{ActivityState, RepositoryFlags, RepositorySnapshot};
use crate::repository_insights::policies::StalenessThresholds;
use chrono::{DateTime, Utc};

/// RepositoryClassifier service deriving activity state and flags
///
/// Results depend on the caller-supplied `now`, so they are recomputed on
/// every report and never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryClassifier {
    thresholds: StalenessThresholds,
}

impl RepositoryClassifier {
    pub fn new(thresholds: StalenessThresholds) -> Self {
        Self { thresholds }
    }

    /// Classifies a repository by the age of its most recent commit
    ///
    /// A repository without a recorded last commit has never been active
    /// and is classified as dormant. Commit dates in the future count as active.
    pub fn classify(&self, repository: &RepositorySnapshot, now: DateTime<Utc>) -> ActivityState {
        let Some(last_commit) = repository.stats.last_commit_date else {
            return ActivityState::Dormant;
        };

        let age = now.signed_duration_since(last_commit);
        if age > self.thresholds.dormant_after() {
            ActivityState::Dormant
        } else if age > self.thresholds.stale_after() {
            ActivityState::Stale
        } else {
            ActivityState::Active
        }
    }

    pub fn flags(&self, repository: &RepositorySnapshot) -> RepositoryFlags {
        RepositoryFlags {
            disabled: repository.is_disabled,
            empty: repository.size == 0,
        }
    }
}
