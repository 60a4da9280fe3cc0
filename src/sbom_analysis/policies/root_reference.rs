use crate::sbom_analysis::domain::SbomDocument;

/// Metadata property some producers use to tag the root component's ecosystem
pub const COMPONENT_TYPES_PROPERTY: &str = "cdx:bom:componentTypes";

const PYPI_COMPONENT_TYPE: &str = "pypi";
const APPLICATION_NAMESPACE: &str = "pkg:application/";
const PYPI_NAMESPACE: &str = "pkg:pypi/";

/// RootReferencePolicy determining which `bom-ref` the SBOM root is filed under
///
/// Python SBOMs tag their root as `pkg:application/...` in metadata while the
/// dependency records use `pkg:pypi/...`. The namespace is rewritten at read
/// time when the `cdx:bom:componentTypes` property says `pypi`.
pub struct RootReferencePolicy;

impl RootReferencePolicy {
    /// Returns the reference to look up the root's dependencies with,
    /// or `None` if the document has no root `bom-ref`
    pub fn resolve(document: &SbomDocument) -> Option<String> {
        let root = document.metadata.component.as_ref()?;
        let bom_ref = root.bom_ref.as_deref()?;

        let is_pypi = root
            .property(COMPONENT_TYPES_PROPERTY)
            .is_some_and(|value| value.trim() == PYPI_COMPONENT_TYPE);

        if is_pypi {
            Some(bom_ref.replacen(APPLICATION_NAMESPACE, PYPI_NAMESPACE, 1))
        } else {
            Some(bom_ref.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_analysis::domain::{Property, RootComponent, SbomMetadata};

    fn document(bom_ref: Option<&str>, component_type: Option<&str>) -> SbomDocument {
        let properties = component_type
            .map(|value| {
                vec![Property {
                    name: COMPONENT_TYPES_PROPERTY.to_string(),
                    value: Some(value.to_string()),
                }]
            })
            .unwrap_or_default();

        SbomDocument {
            metadata: SbomMetadata {
                component: Some(RootComponent {
                    bom_ref: bom_ref.map(str::to_string),
                    name: "acme".to_string(),
                    version: Some("1.0".to_string()),
                    properties,
                }),
            },
            ..SbomDocument::default()
        }
    }

    #[test]
    fn test_resolve_plain_reference() {
        let doc = document(Some("pkg:npm/acme@1.0"), None);
        assert_eq!(
            RootReferencePolicy::resolve(&doc).as_deref(),
            Some("pkg:npm/acme@1.0")
        );
    }

    #[test]
    fn test_resolve_rewrites_pypi_application_namespace() {
        let doc = document(Some("pkg:application/acme@1.0"), Some("pypi"));
        assert_eq!(
            RootReferencePolicy::resolve(&doc).as_deref(),
            Some("pkg:pypi/acme@1.0")
        );
    }

    #[test]
    fn test_resolve_keeps_application_namespace_for_other_types() {
        let doc = document(Some("pkg:application/acme@1.0"), Some("npm"));
        assert_eq!(
            RootReferencePolicy::resolve(&doc).as_deref(),
            Some("pkg:application/acme@1.0")
        );
    }

    #[test]
    fn test_resolve_without_root() {
        assert!(RootReferencePolicy::resolve(&SbomDocument::default()).is_none());
        assert!(RootReferencePolicy::resolve(&document(None, Some("pypi"))).is_none());
    }
}
