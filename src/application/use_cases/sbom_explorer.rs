use crate::sbom_analysis::domain::{Component, DependencyNode, SbomDocument};
use crate::sbom_analysis::policies::RootReferencePolicy;
use crate::sbom_analysis::services::{DependencyTreeResolver, DirectDependencyResolver};
use std::collections::{HashMap, HashSet};

/// The SBOM currently open in the explorer
#[derive(Debug)]
struct Selection {
    component: String,
    version: String,
    document: SbomDocument,
    root_reference: Option<String>,
    direct_dependencies: Vec<Component>,
}

/// SbomExplorer - state of the SBOM view
///
/// Owns the selected `(component, version)`, its document, the direct
/// dependency list, and a lazily filled cache of transitive trees keyed by
/// `bom-ref`. Selecting a new document clears the cache.
#[derive(Debug, Default)]
pub struct SbomExplorer {
    selection: Option<Selection>,
    trees: HashMap<String, Vec<DependencyNode>>,
}

impl SbomExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this `(component, version)` is the open SBOM
    pub fn is_selected(&self, component: &str, version: &str) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.component == component && s.version == version)
    }

    /// Opens a freshly fetched document and resolves its direct dependencies
    pub fn select(&mut self, component: &str, version: &str, document: SbomDocument) {
        self.trees.clear();

        let root_reference = RootReferencePolicy::resolve(&document);
        let direct_dependencies = DirectDependencyResolver::resolve(&document);

        self.selection = Some(Selection {
            component: component.to_string(),
            version: version.to_string(),
            document,
            root_reference,
            direct_dependencies,
        });
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.trees.clear();
    }

    pub fn selection(&self) -> Option<(&str, &str)> {
        self.selection
            .as_ref()
            .map(|s| (s.component.as_str(), s.version.as_str()))
    }

    pub fn root_reference(&self) -> Option<&str> {
        self.selection.as_ref()?.root_reference.as_deref()
    }

    pub fn direct_dependencies(&self) -> &[Component] {
        self.selection
            .as_ref()
            .map(|s| s.direct_dependencies.as_slice())
            .unwrap_or_default()
    }

    /// Resolves (or returns the cached) tree below a direct dependency
    ///
    /// Returns `None` when nothing is selected or `bom_ref` is not a direct
    /// dependency of the open SBOM.
    pub fn expand(&mut self, bom_ref: &str) -> Option<&[DependencyNode]> {
        let selection = self.selection.as_ref()?;
        if !selection
            .direct_dependencies
            .iter()
            .any(|c| c.bom_ref == bom_ref)
        {
            return None;
        }

        let tree = self.trees.entry(bom_ref.to_string()).or_insert_with(|| {
            DependencyTreeResolver::resolve(bom_ref, &selection.document, &HashSet::new())
        });
        Some(tree.as_slice())
    }

    /// A previously expanded tree, without resolving anything
    pub fn expanded(&self, bom_ref: &str) -> Option<&[DependencyNode]> {
        self.trees.get(bom_ref).map(Vec::as_slice)
    }

    pub fn cached_tree_count(&self) -> usize {
        self.trees.len()
    }
}
