pub mod activity_state;
pub mod inventory;

pub use activity_state::{ActivityState, RepositoryFlags};
pub use inventory::{
    parse_timestamp, CommitterSnapshot, ProjectSnapshot, RepositorySnapshot, RepositoryStats,
    SkippedEntry,
};
