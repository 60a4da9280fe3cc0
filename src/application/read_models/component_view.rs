//! Component view structs for the SBOM explorer
//!
//! These structs flatten CycloneDX components for display.

use crate::sbom_analysis::domain::{Component, DependencyNode};
use serde::Serialize;

/// View representation of a software component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    /// BOM reference identifier
    pub bom_ref: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub version: String,
    /// Package URL (purl)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    pub licenses: Vec<String>,
}

impl From<&Component> for ComponentView {
    fn from(component: &Component) -> Self {
        Self {
            bom_ref: component.bom_ref.clone(),
            name: component.name.clone(),
            group: component.group.clone(),
            version: component.version.clone(),
            purl: component.purl.clone(),
            licenses: component.license_names(),
        }
    }
}

/// A node of a resolved dependency tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyNodeView {
    #[serde(flatten)]
    pub component: ComponentView,
    pub children: Vec<DependencyNodeView>,
}

impl From<&DependencyNode> for DependencyNodeView {
    fn from(node: &DependencyNode) -> Self {
        Self {
            component: ComponentView::from(&node.component),
            children: node.children.iter().map(DependencyNodeView::from).collect(),
        }
    }
}

/// A direct dependency of the SBOM root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectDependencyView {
    #[serde(flatten)]
    pub component: ComponentView,
    /// Transitive tree; `None` while the dependency has not been expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DependencyNodeView>>,
}

/// Dependency report for one SBOM (component version)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyReportView {
    pub component: String,
    pub version: String,
    /// The root reference the dependency lookup actually used
    pub root_reference: Option<String>,
    pub direct_dependencies: Vec<DirectDependencyView>,
}

/// One component and its available SBOM versions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntryView {
    pub component: String,
    pub versions: Vec<String>,
}

/// All components with their versions, sorted by component name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SbomCatalogView {
    pub entries: Vec<CatalogEntryView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_analysis::domain::{LicenseChoice, LicenseContent};

    fn component(bom_ref: &str) -> Component {
        Component {
            bom_ref: bom_ref.to_string(),
            name: bom_ref.to_string(),
            version: "1.0".to_string(),
            ..Component::default()
        }
    }

    #[test]
    fn test_component_view_from_component() {
        let mut source = component("pkg:npm/left-pad@1.0");
        source.purl = Some("pkg:npm/left-pad@1.0".to_string());
        source.licenses = vec![LicenseChoice {
            license: Some(LicenseContent {
                id: Some("MIT".to_string()),
                name: None,
            }),
            expression: None,
        }];

        let view = ComponentView::from(&source);
        assert_eq!(view.bom_ref, "pkg:npm/left-pad@1.0");
        assert_eq!(view.licenses, vec!["MIT".to_string()]);
        assert_eq!(view.purl.as_deref(), Some("pkg:npm/left-pad@1.0"));
    }

    #[test]
    fn test_dependency_node_view_keeps_structure() {
        let node = DependencyNode {
            component: component("a"),
            children: vec![DependencyNode {
                component: component("b"),
                children: vec![],
            }],
        };

        let view = DependencyNodeView::from(&node);
        assert_eq!(view.component.bom_ref, "a");
        assert_eq!(view.children.len(), 1);
        assert_eq!(view.children[0].component.bom_ref, "b");
    }

    #[test]
    fn test_unexpanded_direct_dependency_omits_children() {
        let view = DirectDependencyView {
            component: ComponentView::from(&component("a")),
            children: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("children").is_none());
        assert_eq!(json["bom_ref"], "a");
    }
}
