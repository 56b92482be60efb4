pub mod catalog;
pub mod composite;
pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod sheet;
pub mod tables;

use crate::catalog::{Catalog, CatalogIndex};
use crate::config::{load_plan, CategoryKind, CategorySpec};
use crate::error::ReconcileError;
use crate::model::{CatalogItem, Locale, LocaleBundle, LocalizationRecord};
use crate::resolve::{resolve_items, resolve_materials, LocalizationSet, VariantData};
use crate::tables::AdjectiveTables;
use anyhow::{bail, Context};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub catalog_path: PathBuf,
    pub variants_path: PathBuf,
    pub sheets_dir: PathBuf,
    pub out_dir: PathBuf,
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog at {}", path.display()))?;
    let parsed: Vec<CatalogItem> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let mut catalog = Catalog::new();
    for item in parsed {
        if item.variants.len() > 2 {
            bail!(
                "Item {} ({}) declares {} variant axes, expected at most 2",
                item.id,
                item.name,
                item.variants.len()
            );
        }
        if let Some(existing) = catalog.get(&item.id) {
            return Err(ReconcileError::DuplicateId {
                key: item.id.to_string(),
                first: existing.name.clone(),
                second: item.name,
            }
            .into());
        }
        catalog.insert(item.id, item);
    }
    Ok(catalog)
}

pub fn load_variant_data(path: &Path) -> anyhow::Result<VariantData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read variant data at {}", path.display()))?;
    let parsed: VariantData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

/// Fans out over the load plan, one sheet per category. Ingestion order is
/// the plan order regardless of which parse finishes first.
pub fn load_sheets(dir: &Path) -> anyhow::Result<Vec<(CategorySpec, Vec<LocalizationRecord>)>> {
    load_plan()
        .into_par_iter()
        .map(|spec| sheet::load_category(dir, spec.name).map(|records| (spec, records)))
        .collect()
}

#[derive(Debug, Default)]
pub struct Ingested {
    pub set: LocalizationSet,
    pub tables: AdjectiveTables,
}

/// Sequentially files each parsed sheet into the localization set or the
/// adjective tables, in plan order.
pub fn ingest(sheets: Vec<(CategorySpec, Vec<LocalizationRecord>)>) -> Result<Ingested, ReconcileError> {
    let mut set = LocalizationSet::default();
    let mut tables = AdjectiveTables::default();
    for (spec, records) in sheets {
        match spec.kind {
            CategoryKind::Items => {
                for record in records {
                    set.insert(record)?;
                }
            }
            CategoryKind::Adjectives { axis, base, policy } => {
                tables.insert_sheet(axis, base, policy, records)?;
            }
            CategoryKind::SharedVariantItems { representative } => {
                for record in records {
                    tables.clone_shared_variants(representative, &record.id)?;
                    set.insert(record)?;
                }
            }
        }
    }
    Ok(Ingested { set, tables })
}

pub fn write_bundle(dir: &Path, locale: Locale, bundle: &LocaleBundle) -> anyhow::Result<()> {
    let path = dir.join(format!("{}.json", locale.as_str()));
    let json = serde_json::to_string_pretty(bundle)
        .with_context(|| format!("Failed to encode bundle for {}", locale.as_str()))?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let catalog = load_catalog(&opts.catalog_path)?;
    let payloads = load_variant_data(&opts.variants_path)?;
    let index = CatalogIndex::build(&catalog)?;
    let sheets = load_sheets(&opts.sheets_dir)?;
    let ingested = ingest(sheets)?;

    // Resolution happens entirely before emission so every fatal error fires
    // before the first bundle file exists.
    let resolved = resolve_items(&ingested.set, &index, &payloads, &ingested.tables)?;
    let materials = resolve_materials(&catalog, &ingested.set)?;

    std::fs::create_dir_all(&opts.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            opts.out_dir.display()
        )
    })?;
    Locale::ALL.par_iter().try_for_each(|&locale| {
        let bundle = emit::emit_locale(locale, &resolved, &materials);
        write_bundle(&opts.out_dir, locale, &bundle)
    })?;
    println!(
        "Wrote {} locale bundles ({} items, {} materials) to {}",
        Locale::ALL.len(),
        resolved.len(),
        materials.len(),
        opts.out_dir.display()
    );
    Ok(())
}
