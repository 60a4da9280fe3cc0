pub mod dependency_node;
pub mod sbom_document;
pub mod sbom_index;

pub use dependency_node::DependencyNode;
pub use sbom_document::{
    Component, DependencyRecord, LicenseChoice, LicenseContent, Property, RootComponent,
    SbomDocument, SbomMetadata,
};
pub use sbom_index::SbomIndex;
