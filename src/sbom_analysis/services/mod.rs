mod dependency_tree_resolver;
mod direct_dependency_resolver;

pub use dependency_tree_resolver::DependencyTreeResolver;
pub use direct_dependency_resolver::DirectDependencyResolver;
