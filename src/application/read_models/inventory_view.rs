//! Inventory view structs: repositories, projects and committers of a scan

use crate::repository_insights::domain::ActivityState;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// View representation of a classified repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryView {
    pub project: String,
    pub name: String,
    pub state: ActivityState,
    pub disabled: bool,
    pub empty: bool,
    pub size: u64,
    pub last_commit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub repositories: usize,
    /// Repositories classified stale or dormant
    pub inactive_repositories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitterView {
    pub name: String,
    pub commit_count: u64,
}
