use crate::sbom_analysis::domain::{Component, SbomDocument, SbomIndex};
use crate::sbom_analysis::policies::RootReferencePolicy;

/// DirectDependencyResolver service listing what the SBOM root depends on
pub struct DirectDependencyResolver;

impl DirectDependencyResolver {
    /// Returns the components the root depends on directly, in `dependsOn` order
    ///
    /// References without a matching component are dropped: SBOM producers
    /// do not always ship a complete component catalog.
    pub fn resolve(document: &SbomDocument) -> Vec<Component> {
        let Some(root_ref) = RootReferencePolicy::resolve(document) else {
            return Vec::new();
        };

        let index = SbomIndex::new(document);
        let Some(depends_on) = index.depends_on(&root_ref) else {
            return Vec::new();
        };

        depends_on
            .iter()
            .filter_map(|bom_ref| index.component(bom_ref))
            .cloned()
            .collect()
    }
}
