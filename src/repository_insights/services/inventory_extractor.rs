use crate::repository_insights::domain::{
    CommitterSnapshot, ProjectSnapshot, RepositorySnapshot, SkippedEntry,
};
use crate::scan_import::domain::Scan;
use serde_json::Value;

/// InventoryExtractor service reading projects, repositories and committers
/// out of the scanner's schema-light JSON
///
/// Collections may be objects keyed by id or plain arrays. Entries that are
/// not JSON objects are skipped rather than failing the whole report, and
/// recorded so callers can tell the user.
pub struct InventoryExtractor;

/// Projects read from a scan together with the entries left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectExtraction {
    pub projects: Vec<ProjectSnapshot>,
    pub skipped: Vec<SkippedEntry>,
}

impl InventoryExtractor {
    /// Extracts projects with their repositories, sorted by project name
    pub fn projects(scan: &Scan) -> Vec<ProjectSnapshot> {
        Self::extract_projects(scan).projects
    }

    /// Like [`InventoryExtractor::projects`], also listing skipped entries
    pub fn extract_projects(scan: &Scan) -> ProjectExtraction {
        let mut skipped = Vec::new();
        let mut projects = Vec::new();

        for (index, (key, value)) in entries(&scan.projects).into_iter().enumerate() {
            if !value.is_object() {
                skipped.push(SkippedEntry {
                    location: format!("project {}", locate(key, index)),
                    reason: not_an_object(value),
                });
                continue;
            }

            let name = display_name(value, key, "(unnamed project)");
            let repositories = Self::repositories_of(&name, value, &mut skipped);
            projects.push(ProjectSnapshot { name, repositories });
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        ProjectExtraction { projects, skipped }
    }

    /// Extracts committers with their commit counts
    ///
    /// Sorted by commit count (descending), then by name.
    pub fn committers(scan: &Scan) -> Vec<CommitterSnapshot> {
        let mut committers: Vec<CommitterSnapshot> = entries(&scan.committer_stats)
            .into_iter()
            .map(|(key, value)| CommitterSnapshot {
                name: display_name(value, key, "(unknown committer)"),
                commit_count: commit_count(value),
            })
            .collect();

        committers.sort_by(|a, b| {
            b.commit_count
                .cmp(&a.commit_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        committers
    }

    fn repositories_of(
        project_name: &str,
        project: &Value,
        skipped: &mut Vec<SkippedEntry>,
    ) -> Vec<RepositorySnapshot> {
        let Some(repositories) = project.get("repositories") else {
            return Vec::new();
        };

        let mut snapshots = Vec::new();
        for (index, (key, value)) in entries(repositories).into_iter().enumerate() {
            let parsed = if value.is_object() {
                serde_json::from_value::<RepositorySnapshot>(value.clone())
                    .map_err(|e| e.to_string())
            } else {
                Err(not_an_object(value))
            };

            match parsed {
                Ok(mut snapshot) => {
                    if snapshot.name.is_empty() {
                        snapshot.name = key.unwrap_or("(unnamed repository)").to_string();
                    }
                    snapshots.push(snapshot);
                }
                Err(reason) => skipped.push(SkippedEntry {
                    location: format!(
                        "project '{}' repository {}",
                        project_name,
                        locate(key, index)
                    ),
                    reason,
                }),
            }
        }

        snapshots.sort_by(|a, b| a.name.cmp(&b.name));
        snapshots
    }
}

/// `'key'` for keyed entries, `#n` (1-based) for array entries
fn locate(key: Option<&str>, index: usize) -> String {
    match key {
        Some(key) => format!("'{}'", key),
        None => format!("#{}", index + 1),
    }
}

fn not_an_object(value: &Value) -> String {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    format!("expected an object, found {}", kind)
}

/// Flattens an object (keyed entries) or an array (unkeyed entries)
fn entries(collection: &Value) -> Vec<(Option<&str>, &Value)> {
    match collection {
        Value::Object(map) => map.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        Value::Array(items) => items.iter().map(|v| (None, v)).collect(),
        _ => Vec::new(),
    }
}

fn display_name(value: &Value, key: Option<&str>, fallback: &str) -> String {
    ["name", "displayName", "email"]
        .iter()
        .find_map(|field| value.get(*field).and_then(Value::as_str))
        .filter(|name| !name.trim().is_empty())
        .or(key)
        .unwrap_or(fallback)
        .to_string()
}

fn commit_count(value: &Value) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }

    for field in ["commits", "commit_count", "commitCount", "count"] {
        match value.get(field) {
            Some(Value::Number(n)) => return n.as_u64().unwrap_or(0),
            Some(Value::Array(items)) => return items.len() as u64,
            _ => {}
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_import::services::{ScanNormalizer, ScanValidator};
    use serde_json::json;

    fn scan_with(projects: Value, committer_stats: Value) -> Scan {
        let result = ScanValidator::validate(json!({
            "organisation": {"name": "contoso"},
            "projects": projects,
            "build_definitions": {},
            "builds": {},
            "protected_resources": {},
            "committer_stats": committer_stats
        }))
        .unwrap();
        ScanNormalizer::normalize(result)
    }

    #[test]
    fn test_projects_from_keyed_object() {
        let scan = scan_with(
            json!({
                "p2": {"name": "Web", "repositories": []},
                "p1": {
                    "name": "Payments",
                    "repositories": {
                        "r2": {"name": "payments-ui", "size": 0, "isDisabled": true},
                        "r1": {
                            "name": "payments-api",
                            "size": 1024,
                            "stats": {
                                "lastCommitDate": "2024-05-01T10:00:00Z",
                                "languages": {"Rust": 900, "Shell": 124}
                            }
                        }
                    }
                }
            }),
            json!({}),
        );

        let projects = InventoryExtractor::projects(&scan);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Payments");
        assert_eq!(projects[1].name, "Web");

        let repositories = &projects[0].repositories;
        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].name, "payments-api");
        assert_eq!(repositories[0].size, 1024);
        assert!(repositories[0].stats.last_commit_date.is_some());
        assert_eq!(repositories[0].stats.languages["Rust"], 900.0);
        assert!(repositories[1].is_disabled);
    }

    #[test]
    fn test_projects_from_array_with_snake_case_fields() {
        let scan = scan_with(
            json!([{
                "name": "Ops",
                "repositories": [{
                    "name": "infra",
                    "is_disabled": true,
                    "stats": {"last_commit_date": "2023-01-01T00:00:00Z"}
                }]
            }]),
            json!({}),
        );

        let projects = InventoryExtractor::projects(&scan);
        assert_eq!(projects.len(), 1);
        let repository = &projects[0].repositories[0];
        assert!(repository.is_disabled);
        assert!(repository.stats.last_commit_date.is_some());
    }

    #[test]
    fn test_projects_fall_back_to_keys_and_skip_malformed_entries() {
        let scan = scan_with(
            json!({
                "Legacy": {
                    "repositories": {
                        "old-repo": {"size": 10},
                        "odd-size": {"name": "odd-size", "size": "huge"},
                        "ghost": "n/a"
                    }
                },
                "not-a-project": 3
            }),
            json!({}),
        );

        let extraction = InventoryExtractor::extract_projects(&scan);
        assert_eq!(extraction.projects.len(), 1);
        assert_eq!(extraction.projects[0].name, "Legacy");

        let names: Vec<&str> = extraction.projects[0]
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["odd-size", "old-repo"]);
        assert_eq!(extraction.projects[0].repositories[0].size, 0);

        let skipped: Vec<String> = extraction.skipped.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            skipped,
            vec![
                "Skipped project 'Legacy' repository 'ghost': expected an object, found a string"
                    .to_string(),
                "Skipped project 'not-a-project': expected an object, found a number".to_string(),
            ]
        );
    }

    #[test]
    fn test_repositories_with_loose_fields_are_kept() {
        let scan = scan_with(
            json!({
                "p1": {
                    "name": "Loose",
                    "repositories": [
                        {"name": "naive-date", "stats": {"lastCommitDate": "2024-05-01T10:00:00"}},
                        {"name": "fractional", "stats": {"lastCommitDate": "2024-05-01T10:00:00.000Z"}},
                        {"name": "null-size", "size": null},
                        {"name": "null-bytes", "stats": {"languages": {"Rust": null}}},
                        null
                    ]
                }
            }),
            json!({}),
        );

        let extraction = InventoryExtractor::extract_projects(&scan);
        let repositories = &extraction.projects[0].repositories;
        assert_eq!(repositories.len(), 4);
        assert!(repositories
            .iter()
            .filter(|r| r.name == "naive-date" || r.name == "fractional")
            .all(|r| r.stats.last_commit_date.is_some()));

        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(
            extraction.skipped[0].location,
            "project 'Loose' repository #5"
        );
    }

    #[test]
    fn test_committers_sorted_by_commit_count() {
        let scan = scan_with(
            json!({}),
            json!({
                "alice@contoso.com": {"name": "Alice", "commits": 12},
                "bob@contoso.com": {"commits": [{"sha": "a"}, {"sha": "b"}]},
                "carol@contoso.com": 12,
                "dave@contoso.com": {"unrelated": true}
            }),
        );

        let committers = InventoryExtractor::committers(&scan);
        let summary: Vec<(&str, u64)> = committers
            .iter()
            .map(|c| (c.name.as_str(), c.commit_count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Alice", 12),
                ("carol@contoso.com", 12),
                ("bob@contoso.com", 2),
                ("dave@contoso.com", 0),
            ]
        );
    }
}
