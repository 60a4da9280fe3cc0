use super::{Component, DependencyRecord, SbomDocument};
use std::collections::HashMap;

/// SbomIndex - lookup tables over a borrowed `SbomDocument`
///
/// When a `bom-ref` appears more than once, the first occurrence wins.
/// Components with an empty `bom-ref` are not addressable.
#[derive(Debug)]
pub struct SbomIndex<'a> {
    components: HashMap<&'a str, &'a Component>,
    dependencies: HashMap<&'a str, &'a DependencyRecord>,
}

impl<'a> SbomIndex<'a> {
    pub fn new(document: &'a SbomDocument) -> Self {
        let mut components = HashMap::with_capacity(document.components.len());
        for component in &document.components {
            if !component.bom_ref.is_empty() {
                components.entry(component.bom_ref.as_str()).or_insert(component);
            }
        }

        let mut dependencies = HashMap::with_capacity(document.dependencies.len());
        for record in &document.dependencies {
            dependencies.entry(record.reference.as_str()).or_insert(record);
        }

        Self {
            components,
            dependencies,
        }
    }

    pub fn component(&self, bom_ref: &str) -> Option<&'a Component> {
        self.components.get(bom_ref).copied()
    }

    /// The `dependsOn` list of a reference, if it has a record with one
    pub fn depends_on(&self, bom_ref: &str) -> Option<&'a [String]> {
        self.dependencies
            .get(bom_ref)
            .and_then(|record| record.depends_on.as_deref())
    }
}
