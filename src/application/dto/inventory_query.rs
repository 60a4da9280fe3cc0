use crate::repository_insights::domain::ActivityState;

/// InventoryQuery - filter and paging options of the inventory reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    /// Case-insensitive substring of the display name
    pub filter: Option<String>,
    /// Only repositories in this state (repository report only)
    pub state: Option<ActivityState>,
    /// 1-based page number
    pub page: usize,
    /// Overrides the configured page size
    pub page_size: Option<usize>,
}
