/// DependencyQuery - which SBOM to open and which direct dependencies to expand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyQuery {
    pub component: String,
    pub version: String,
    /// bom-refs of direct dependencies whose trees are resolved
    pub expand: Vec<String>,
    /// Resolve the tree of every direct dependency
    pub expand_all: bool,
}
