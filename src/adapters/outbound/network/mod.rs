/// Network adapters for external API calls
mod github_sbom_repository;

pub use github_sbom_repository::{GitHubSbomRepository, GitHubSbomSource};
