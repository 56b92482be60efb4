use crate::catalog::{recipe_materials, Catalog, CatalogIndex, VariantShape};
use crate::error::ReconcileError;
use crate::model::{LocalizationRecord, VariantPayload};
use crate::normalize::normalize_name;
use crate::tables::{AdjectiveTables, Axis};
use std::collections::{BTreeMap, HashMap};

pub type VariantData = HashMap<u32, VariantPayload>;

/// All item-context localization records, indexed by composite id and by
/// normalized reference name. Both keys are unique; a collision on either is
/// fatal since silently dropping a record risks mistranslating an unrelated
/// item.
#[derive(Debug, Default)]
pub struct LocalizationSet {
    records: BTreeMap<String, LocalizationRecord>,
    by_name: HashMap<String, String>,
}

impl LocalizationSet {
    pub fn insert(&mut self, record: LocalizationRecord) -> Result<(), ReconcileError> {
        if let Some(existing) = self.records.get(&record.id) {
            return Err(ReconcileError::DuplicateId {
                key: record.id.clone(),
                first: existing.reference_name().to_string(),
                second: record.reference_name().to_string(),
            });
        }
        let name = normalize_name(record.reference_name());
        if let Some(existing_id) = self.by_name.get(&name) {
            return Err(ReconcileError::DuplicateId {
                key: name,
                first: existing_id.clone(),
                second: record.id.clone(),
            });
        }
        self.by_name.insert(name, record.id.clone());
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LocalizationRecord> {
        self.records.get(id)
    }

    /// Composite id for a normalized reference name.
    pub fn lookup_name(&self, normalized_name: &str) -> Option<&str> {
        self.by_name.get(normalized_name).map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = (&String, &LocalizationRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A localization record matched to its canonical item, with its adjective
/// records joined but not yet projected into any locale.
#[derive(Debug)]
pub struct ResolvedItem<'a> {
    pub canonical_id: u32,
    pub record: &'a LocalizationRecord,
    pub adjectives: Option<ResolvedAdjectives<'a>>,
}

#[derive(Debug)]
pub enum ResolvedAdjectives<'a> {
    Single(Vec<&'a LocalizationRecord>),
    Dual(AxisRefs<'a>, AxisRefs<'a>),
}

/// One dual-axis dimension: `Collapsed` when the canonical list has at most
/// one entry (the axis is not meaningfully variable and emits a placeholder).
#[derive(Debug)]
pub enum AxisRefs<'a> {
    Collapsed,
    Joined(Vec<&'a LocalizationRecord>),
}

/// Matches every item record against the catalog. Records with no canonical
/// counterpart are warned and skipped; a canonical variant token with no
/// table entry aborts, since that is a consistency break between the two
/// catalogs rather than a coverage gap.
pub fn resolve_items<'a>(
    set: &'a LocalizationSet,
    index: &CatalogIndex,
    payloads: &VariantData,
    tables: &'a AdjectiveTables,
) -> Result<Vec<ResolvedItem<'a>>, ReconcileError> {
    let mut resolved = Vec::new();
    for (composite_id, record) in set.records() {
        let Some(canonical_id) = index.lookup(&normalize_name(record.reference_name())) else {
            eprintln!(
                "No catalog entry matches {:?} ({composite_id}), skipping",
                record.reference_name()
            );
            continue;
        };
        let adjectives = match (index.shape(canonical_id), payloads.get(&canonical_id)) {
            // The payload map is the authority on whether adjective data
            // exists at all.
            (VariantShape::NoVariants, _) | (_, None) => None,
            (VariantShape::SingleAxis, Some(VariantPayload::Single(tokens))) => Some(
                ResolvedAdjectives::Single(join_axis(tables, Axis::Variant, composite_id, tokens)?),
            ),
            (VariantShape::DualAxis, Some(VariantPayload::Dual(variants, patterns))) => {
                Some(ResolvedAdjectives::Dual(
                    resolve_axis(tables, Axis::Variant, composite_id, variants)?,
                    resolve_axis(tables, Axis::Pattern, composite_id, patterns)?,
                ))
            }
            _ => return Err(ReconcileError::PayloadShape { id: canonical_id }),
        };
        resolved.push(ResolvedItem {
            canonical_id,
            record,
            adjectives,
        });
    }
    Ok(resolved)
}

fn resolve_axis<'a>(
    tables: &'a AdjectiveTables,
    axis: Axis,
    base: &str,
    tokens: &[String],
) -> Result<AxisRefs<'a>, ReconcileError> {
    if tokens.len() <= 1 {
        return Ok(AxisRefs::Collapsed);
    }
    Ok(AxisRefs::Joined(join_axis(tables, axis, base, tokens)?))
}

fn join_axis<'a>(
    tables: &'a AdjectiveTables,
    axis: Axis,
    base: &str,
    tokens: &[String],
) -> Result<Vec<&'a LocalizationRecord>, ReconcileError> {
    tokens
        .iter()
        .map(|token| {
            tables
                .entry(axis, base, token)
                .ok_or_else(|| ReconcileError::UnresolvedVariant {
                    base: base.to_string(),
                    token: token.clone(),
                })
        })
        .collect()
}

/// Resolves every distinct recipe material to its localization record, up
/// front so a missing material aborts before any bundle is written.
pub fn resolve_materials<'a>(
    catalog: &Catalog,
    set: &'a LocalizationSet,
) -> Result<Vec<(String, &'a LocalizationRecord)>, ReconcileError> {
    let mut materials = Vec::new();
    for name in recipe_materials(catalog) {
        let record = set
            .lookup_name(&normalize_name(&name))
            .and_then(|id| set.get(id))
            .ok_or_else(|| ReconcileError::UnresolvedMaterial { name: name.clone() })?;
        materials.push((name, record));
    }
    Ok(materials)
}
