//! SBOM analysis: CycloneDX document model and dependency resolution.
//!
//! Every function here is a pure function of an already-fetched document.
pub mod domain;
pub mod policies;
pub mod services;
