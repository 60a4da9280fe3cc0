/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and outcomes back,
/// keeping the domain layer isolated.
mod dependency_query;
mod import_request;
mod inventory_query;
mod output_format;

pub use dependency_query::DependencyQuery;
pub use import_request::{ImportOutcome, ImportReceipt, ImportRequest};
pub use inventory_query::InventoryQuery;
pub use output_format::OutputFormat;
