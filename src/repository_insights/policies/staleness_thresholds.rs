use crate::shared::error::ObservesError;
use crate::shared::Result;
use chrono::Duration;

/// Default age after which a repository is stale ("more than 3 months")
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 90;

/// Default age after which a repository is dormant ("more than 1 year")
pub const DEFAULT_DORMANT_AFTER_DAYS: u32 = 365;

/// StalenessThresholds policy for repository activity classification
///
/// Both thresholds are exclusive: a repository whose last commit is exactly
/// `stale_after_days` old is still active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessThresholds {
    stale_after_days: u32,
    dormant_after_days: u32,
}

impl StalenessThresholds {
    /// Creates thresholds, requiring `0 < stale_after_days < dormant_after_days`
    pub fn new(stale_after_days: u32, dormant_after_days: u32) -> Result<Self> {
        if stale_after_days == 0 {
            return Err(ObservesError::Validation {
                message: "stale_after_days must be at least 1".to_string(),
            }
            .into());
        }

        if stale_after_days >= dormant_after_days {
            return Err(ObservesError::Validation {
                message: format!(
                    "stale_after_days ({}) must be smaller than dormant_after_days ({})",
                    stale_after_days, dormant_after_days
                ),
            }
            .into());
        }

        Ok(Self {
            stale_after_days,
            dormant_after_days,
        })
    }

    pub fn stale_after(&self) -> Duration {
        Duration::days(i64::from(self.stale_after_days))
    }

    pub fn dormant_after(&self) -> Duration {
        Duration::days(i64::from(self.dormant_after_days))
    }

    pub fn stale_after_days(&self) -> u32 {
        self.stale_after_days
    }

    pub fn dormant_after_days(&self) -> u32 {
        self.dormant_after_days
    }
}

impl Default for StalenessThresholds {
    fn default() -> Self {
        Self {
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            dormant_after_days: DEFAULT_DORMANT_AFTER_DAYS,
        }
    }
}
