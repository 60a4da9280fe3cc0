use crate::shared::lenient::null_as_default;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Repository statistics computed by the scanner
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryStats {
    #[serde(
        default,
        rename = "lastCommitDate",
        alias = "last_commit_date",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_commit_date: Option<DateTime<Utc>>,
    /// Bytes of source per language
    #[serde(default, deserialize_with = "lenient_languages")]
    pub languages: BTreeMap<String, f64>,
}

/// RepositorySnapshot - one repository as recorded in a scan
///
/// Every field tolerates `null` and values of the wrong type, so any JSON
/// object reads as a repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositorySnapshot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(
        default,
        rename = "isDisabled",
        alias = "is_disabled",
        deserialize_with = "lenient_bool"
    )]
    pub is_disabled: bool,
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: u64,
    #[serde(default, deserialize_with = "lenient_stats")]
    pub stats: RepositoryStats,
}

/// ProjectSnapshot - a project and the repositories it owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSnapshot {
    pub name: String,
    pub repositories: Vec<RepositorySnapshot>,
}

/// CommitterSnapshot - commit activity of one committer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitterSnapshot {
    pub name: String,
    pub commit_count: u64,
}

/// An inventory entry left out of a report because it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Where the entry sits, e.g. `project 'Web' repository #2`
    pub location: String,
    pub reason: String,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipped {}: {}", self.location, self.reason)
    }
}

/// Parses the timestamp shapes scanners emit
///
/// Accepts RFC 3339, offset-less date-times (read as UTC) and bare dates
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

/// Non-numeric byte counts are dropped
fn lenient_languages<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(language, bytes)| bytes.as_f64().map(|bytes| (language, bytes)))
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_bool).unwrap_or(false))
}

/// Whole bytes from a number or a numeric string; anything else is 0
fn lenient_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_stats<'de, D>(deserializer: D) -> Result<RepositoryStats, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = null_as_default(deserializer)?;
    if !value.is_object() {
        return Ok(RepositoryStats::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}
