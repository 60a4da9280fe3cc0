use crate::shared::lenient::{null_as_default, skip_invalid_entries};
use serde::{Deserialize, Serialize};

/// SbomDocument - the subset of a CycloneDX JSON document this crate reads
///
/// Every collection defaults to empty so that documents from producers that
/// omit sections still load. Entries that cannot be read (a dependency record
/// without `ref`, a component that is not an object) are dropped; `null`
/// scalars take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbomDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: SbomMetadata,
    #[serde(default, deserialize_with = "skip_invalid_entries")]
    pub components: Vec<Component>,
    #[serde(default, deserialize_with = "skip_invalid_entries")]
    pub dependencies: Vec<DependencyRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbomMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<RootComponent>,
}

/// The component the SBOM describes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootComponent {
    #[serde(rename = "bom-ref", default, skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "skip_invalid_entries"
    )]
    pub properties: Vec<Property>,
}

impl RootComponent {
    /// Value of the first property with the given name
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Component entry of the SBOM catalog, keyed by `bom-ref`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "bom-ref", default, deserialize_with = "null_as_default")]
    pub bom_ref: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "skip_invalid_entries"
    )]
    pub licenses: Vec<LicenseChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Component {
    /// License identifiers, names or expressions, in document order
    pub fn license_names(&self) -> Vec<String> {
        self.licenses
            .iter()
            .filter_map(LicenseChoice::display_name)
            .collect()
    }
}

/// CycloneDX license choice: a single license or an SPDX expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl LicenseChoice {
    /// SPDX id if present, otherwise the license name, otherwise the expression
    pub fn display_name(&self) -> Option<String> {
        self.license
            .as_ref()
            .and_then(|l| l.id.clone().or_else(|| l.name.clone()))
            .or_else(|| self.expression.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Dependency edge list of one component
///
/// `ref` is required; `null` entries inside `dependsOn` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(
        rename = "dependsOn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "depends_on_refs"
    )]
    pub depends_on: Option<Vec<String>>,
}

fn depends_on_refs<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let refs = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(refs.map(|refs| refs.into_iter().flatten().collect()))
}
