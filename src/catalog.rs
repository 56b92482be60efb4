use crate::error::ReconcileError;
use crate::model::CatalogItem;
use crate::normalize::normalize_name;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type Catalog = BTreeMap<u32, CatalogItem>;

/// How many variation axes a catalog item declares. Centralizes the 0/1/2
/// list-length dispatch so it is classified exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantShape {
    NoVariants,
    SingleAxis,
    DualAxis,
}

/// Normalized-name index over the canonical catalog, plus each item's
/// variant shape. Built once, immutable afterwards.
#[derive(Debug)]
pub struct CatalogIndex {
    by_name: HashMap<String, u32>,
    shapes: HashMap<u32, VariantShape>,
}

impl CatalogIndex {
    pub fn build(catalog: &Catalog) -> Result<Self, ReconcileError> {
        let mut by_name = HashMap::new();
        let mut shapes = HashMap::new();
        for (&id, item) in catalog {
            let key = normalize_name(&item.name);
            if let Some(existing) = by_name.insert(key.clone(), id) {
                return Err(ReconcileError::DuplicateId {
                    key,
                    first: existing.to_string(),
                    second: id.to_string(),
                });
            }
            // Axis counts above two are rejected at catalog load.
            let shape = match item.variants.len() {
                0 => VariantShape::NoVariants,
                1 => VariantShape::SingleAxis,
                _ => VariantShape::DualAxis,
            };
            shapes.insert(id, shape);
        }
        Ok(CatalogIndex { by_name, shapes })
    }

    pub fn lookup(&self, normalized_name: &str) -> Option<u32> {
        self.by_name.get(normalized_name).copied()
    }

    pub fn shape(&self, id: u32) -> VariantShape {
        self.shapes
            .get(&id)
            .copied()
            .unwrap_or(VariantShape::NoVariants)
    }
}

/// Distinct material names referenced by any recipe, sorted for
/// deterministic resolution order.
pub fn recipe_materials(catalog: &Catalog) -> BTreeSet<String> {
    let mut materials = BTreeSet::new();
    for item in catalog.values() {
        for name in item.requirement_names() {
            materials.insert(name.to_string());
        }
    }
    materials
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, axes: &[u32]) -> CatalogItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category": "Furniture",
            "variants": axes,
        }))
        .unwrap()
    }

    fn catalog_of(items: Vec<CatalogItem>) -> Catalog {
        items.into_iter().map(|item| (item.id, item)).collect()
    }

    #[test]
    fn classifies_variant_shapes() -> Result<(), ReconcileError> {
        let catalog = catalog_of(vec![
            item(1, "Acoustic Guitar", &[]),
            item(2, "Log Stool", &[4]),
            item(3, "Patchwork Chair", &[3, 2]),
        ]);
        let index = CatalogIndex::build(&catalog)?;
        assert_eq!(index.shape(1), VariantShape::NoVariants);
        assert_eq!(index.shape(2), VariantShape::SingleAxis);
        assert_eq!(index.shape(3), VariantShape::DualAxis);
        Ok(())
    }

    #[test]
    fn looks_up_by_normalized_name() -> Result<(), ReconcileError> {
        let catalog = catalog_of(vec![item(7, "Acoustic Guitar", &[])]);
        let index = CatalogIndex::build(&catalog)?;
        assert_eq!(index.lookup("acoustic guitar"), Some(7));
        assert_eq!(index.lookup("Acoustic Guitar"), None);
        Ok(())
    }

    #[test]
    fn duplicate_normalized_names_are_fatal() {
        let catalog = catalog_of(vec![item(1, "Acorn", &[]), item(2, "acorn", &[])]);
        let err = CatalogIndex::build(&catalog).unwrap_err();
        match err {
            ReconcileError::DuplicateId { key, first, second } => {
                assert_eq!(key, "acorn");
                assert_eq!(first, "1");
                assert_eq!(second, "2");
            }
            other => panic!("expected DuplicateId, got {other}"),
        }
    }

    #[test]
    fn gathers_distinct_recipe_materials() {
        let mut stool = item(1, "Log Stool", &[]);
        stool.recipe = serde_json::from_str(r#"[2, "DIY", [4, "wood"], [1, "clay"]]"#).unwrap();
        let mut bench = item(2, "Log Bench", &[]);
        bench.recipe = serde_json::from_str(r#"[3, "DIY", [8, "wood"]]"#).unwrap();
        let catalog = catalog_of(vec![stool, bench]);
        let materials: Vec<String> = recipe_materials(&catalog).into_iter().collect();
        assert_eq!(materials, vec!["clay".to_string(), "wood".to_string()]);
    }
}
