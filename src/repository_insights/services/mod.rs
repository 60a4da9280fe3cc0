mod inventory_extractor;
mod language_breakdown;
mod name_filter;
mod paginator;
mod repository_classifier;

pub use inventory_extractor::{InventoryExtractor, ProjectExtraction};
pub use language_breakdown::{LanguageBreakdown, LanguageShare};
pub use name_filter::NameFilter;
pub use paginator::{Page, Paginator};
pub use repository_classifier::RepositoryClassifier;
