mod staleness_thresholds;

pub use staleness_thresholds::{
    StalenessThresholds, DEFAULT_DORMANT_AFTER_DAYS, DEFAULT_STALE_AFTER_DAYS,
};
