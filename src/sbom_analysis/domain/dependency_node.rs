use super::Component;
use serde::Serialize;

/// DependencyNode - a resolved component and its resolved dependencies
///
/// Derived on demand from an `SbomDocument`; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyNode {
    pub component: Component,
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DependencyNode::node_count).sum::<usize>()
    }

    /// Length of the longest path from this node to a leaf, counted in nodes
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::depth)
            .max()
            .unwrap_or(0)
    }
}
