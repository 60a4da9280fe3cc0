use crate::sbom_analysis::domain::{DependencyNode, SbomDocument, SbomIndex};
use std::collections::HashSet;

/// DependencyTreeResolver service building transitive dependency trees
///
/// Cycle protection is per path: each recursive call works on its own copy of
/// the set of references between the root and the current node. A component
/// reachable through two different branches (a diamond) therefore appears
/// under both, while a reference that is already on the current path is
/// pruned.
///
/// Diamonds multiply: a tree is capped at [`Self::MAX_TREE_NODES`] nodes,
/// filled depth-first in `dependsOn` order, and siblings past the cap are cut.
pub struct DependencyTreeResolver;

impl DependencyTreeResolver {
    /// Maximum depth of a resolved tree; deeper children resolve to an empty list
    pub const MAX_TREE_DEPTH: usize = 100;

    /// Maximum number of nodes in one resolved tree
    pub const MAX_TREE_NODES: usize = 10_000;

    /// Resolves the dependency tree below `bom_ref`
    ///
    /// # Arguments
    /// * `bom_ref` - The component whose dependencies are resolved
    /// * `document` - The SBOM to resolve against
    /// * `visited` - References considered already on the path; pass an
    ///   empty set to start a fresh tree
    ///
    /// # Returns
    /// The children of `bom_ref`, each with its own resolved subtree.
    /// Unresolvable references are dropped.
    pub fn resolve(
        bom_ref: &str,
        document: &SbomDocument,
        visited: &HashSet<String>,
    ) -> Vec<DependencyNode> {
        let index = SbomIndex::new(document);
        let mut remaining_nodes = Self::MAX_TREE_NODES;
        Self::resolve_indexed(bom_ref, &index, visited, 0, &mut remaining_nodes)
    }

    fn resolve_indexed(
        bom_ref: &str,
        index: &SbomIndex<'_>,
        visited: &HashSet<String>,
        depth: usize,
        remaining_nodes: &mut usize,
    ) -> Vec<DependencyNode> {
        if depth >= Self::MAX_TREE_DEPTH || visited.contains(bom_ref) {
            return Vec::new();
        }

        let Some(depends_on) = index.depends_on(bom_ref) else {
            return Vec::new();
        };

        let mut path = visited.clone();
        path.insert(bom_ref.to_string());

        let mut nodes = Vec::new();
        for child_ref in depends_on.iter() {
            if *remaining_nodes == 0 {
                break;
            }
            if path.contains(child_ref.as_str()) {
                continue;
            }
            let Some(component) = index.component(child_ref) else {
                continue;
            };

            *remaining_nodes -= 1;
            let children =
                Self::resolve_indexed(child_ref, index, &path, depth + 1, remaining_nodes);
            nodes.push(DependencyNode {
                component: component.clone(),
                children,
            });
        }
        nodes
    }
}
