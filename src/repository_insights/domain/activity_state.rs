use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Activity classification of a repository, based on last-commit recency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    Active,
    Stale,
    Dormant,
}

impl ActivityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityState::Active => "active",
            ActivityState::Stale => "stale",
            ActivityState::Dormant => "dormant",
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ActivityState::Active),
            "stale" => Ok(ActivityState::Stale),
            "dormant" => Ok(ActivityState::Dormant),
            _ => Err(format!(
                "Invalid state: {}. Please specify 'active', 'stale' or 'dormant'",
                s
            )),
        }
    }
}

/// Independent presentation flags of a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryFlags {
    /// Sourced directly from the scanner data
    pub disabled: bool,
    /// True when the repository size is zero
    pub empty: bool,
}
