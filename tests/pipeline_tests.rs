use std::collections::BTreeMap;

use translation_bundler::catalog::{Catalog, CatalogIndex};
use translation_bundler::composite::{BaseRule, IdPolicy};
use translation_bundler::config::{CategoryKind, CategorySpec};
use translation_bundler::emit::emit_locale;
use translation_bundler::ingest;
use translation_bundler::model::{
    CatalogItem, Locale, LocaleBundle, LocalizationRecord, VariantPayload,
};
use translation_bundler::resolve::{resolve_items, resolve_materials, VariantData};
use translation_bundler::tables::Axis;

fn catalog_item(id: u32, name: &str, axes: &[u32], recipe: Option<&str>) -> CatalogItem {
    let mut value = serde_json::json!({
        "id": id,
        "name": name,
        "category": "Furniture",
        "variants": axes,
    });
    if let Some(recipe) = recipe {
        value["recipe"] = serde_json::from_str(recipe).unwrap();
    }
    serde_json::from_value(value).unwrap()
}

fn catalog_of(items: Vec<CatalogItem>) -> Catalog {
    items.into_iter().map(|item| (item.id, item)).collect()
}

// Localized columns derived from the reference name so capitalization is
// observable per locale.
fn record(id: &str, us_en: &str) -> LocalizationRecord {
    LocalizationRecord {
        id: id.to_string(),
        us_en: us_en.to_string(),
        eu_de: format!("de {us_en}"),
        eu_en: us_en.to_string(),
        jp_ja: format!("ja {us_en}"),
        ..LocalizationRecord::default()
    }
}

fn items_sheet(name: &'static str, records: Vec<LocalizationRecord>) -> (CategorySpec, Vec<LocalizationRecord>) {
    (
        CategorySpec {
            name,
            kind: CategoryKind::Items,
        },
        records,
    )
}

fn variant_sheet(
    name: &'static str,
    base: BaseRule,
    records: Vec<LocalizationRecord>,
) -> (CategorySpec, Vec<LocalizationRecord>) {
    (
        CategorySpec {
            name,
            kind: CategoryKind::Adjectives {
                axis: Axis::Variant,
                base,
                policy: IdPolicy::Strict,
            },
        },
        records,
    )
}

fn bundles(
    catalog: &Catalog,
    payloads: &VariantData,
    sheets: Vec<(CategorySpec, Vec<LocalizationRecord>)>,
) -> anyhow::Result<BTreeMap<Locale, LocaleBundle>> {
    let index = CatalogIndex::build(catalog)?;
    let ingested = ingest(sheets)?;
    let resolved = resolve_items(&ingested.set, &index, payloads, &ingested.tables)?;
    let materials = resolve_materials(catalog, &ingested.set)?;
    Ok(Locale::ALL
        .iter()
        .map(|&locale| (locale, emit_locale(locale, &resolved, &materials)))
        .collect())
}

#[test]
fn no_variants_item_emits_bare_name_everywhere() -> anyhow::Result<()> {
    let catalog = catalog_of(vec![catalog_item(5001, "Acoustic Guitar", &[], None)]);
    let sheets = vec![items_sheet(
        "Tools",
        vec![record("Tool_00001", "acoustic guitar")],
    )];

    let all = bundles(&catalog, &VariantData::new(), sheets)?;
    assert_eq!(all.len(), Locale::ALL.len());
    for (locale, bundle) in &all {
        let entry = &bundle.items[&5001];
        assert!(entry.adjectives.is_none(), "adjectives leaked into {locale:?}");
        let value = serde_json::to_value(entry)?;
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1, "bundle entry must stay a 1-array");
    }
    assert_eq!(all[&Locale::De].items[&5001].item, "De acoustic guitar");
    assert_eq!(all[&Locale::EnGb].items[&5001].item, "Acoustic guitar");
    Ok(())
}

#[test]
fn dual_axis_with_short_pattern_axis_emits_placeholder() -> anyhow::Result<()> {
    let catalog = catalog_of(vec![catalog_item(6002, "Gingham Shirt", &[2, 1], None)]);
    let payloads: VariantData = [(
        6002,
        VariantPayload::Dual(
            vec!["red".to_string(), "blue".to_string()],
            vec!["solid".to_string()],
        ),
    )]
    .into();
    let sheets = vec![
        items_sheet("Tops", vec![record("Tops6002", "gingham shirt")]),
        variant_sheet(
            "Tops Variants",
            BaseRule::FirstSegment,
            vec![
                record("Tops6002_Tops_0", "red"),
                record("Tops6002_Tops_1", "blue"),
            ],
        ),
    ];

    let all = bundles(&catalog, &payloads, sheets)?;
    for (_, bundle) in &all {
        let value = serde_json::to_value(&bundle.items[&6002])?;
        let adjectives = &value.as_array().unwrap()[1];
        assert_eq!(adjectives.as_array().unwrap().len(), 2);
        assert_eq!(adjectives[1], serde_json::json!([""]));
    }
    let de = serde_json::to_value(&all[&Locale::De].items[&6002])?;
    assert_eq!(de[1][0], serde_json::json!(["De red", "De blue"]));
    Ok(())
}

#[test]
fn shared_variant_clone_round_trips_to_the_representative_join() -> anyhow::Result<()> {
    let catalog = catalog_of(vec![
        catalog_item(101, "mom's photo", &[6], None),
        catalog_item(102, "dad's photo", &[6], None),
    ]);
    let tokens = vec!["standee".to_string(), "easel".to_string()];
    let payloads: VariantData = [
        (101, VariantPayload::Single(tokens.clone())),
        (102, VariantPayload::Single(tokens)),
    ]
    .into();
    let sheets = vec![
        variant_sheet(
            "Item Variant Names",
            BaseRule::FirstTwoSegments,
            vec![
                record("Bromide_06426_0", "standee"),
                record("Bromide_06426_1", "easel"),
            ],
        ),
        (
            CategorySpec {
                name: "Photos",
                kind: CategoryKind::SharedVariantItems {
                    representative: "Bromide_06426",
                },
            },
            vec![
                record("Bromide_06426", "mom's photo"),
                record("Bromide_06427", "dad's photo"),
            ],
        ),
    ];

    let all = bundles(&catalog, &payloads, sheets)?;
    for (_, bundle) in &all {
        // The cloned family member joins to exactly the representative's strings.
        assert_eq!(bundle.items[&101].adjectives, bundle.items[&102].adjectives);
    }
    let de = &all[&Locale::De].items[&102];
    assert_eq!(de.item, "De dad's photo");
    let value = serde_json::to_value(de)?;
    assert_eq!(value[1], serde_json::json!(["De standee", "De easel"]));
    Ok(())
}

#[test]
fn duplicate_canonical_names_abort_before_any_bundle() {
    let catalog = catalog_of(vec![
        catalog_item(1, "Acorn", &[], None),
        catalog_item(2, "acorn", &[], None),
    ]);
    let sheets = vec![items_sheet("Crafting Items", vec![record("Mat_1", "acorn")])];
    let err = bundles(&catalog, &VariantData::new(), sheets).unwrap_err();
    assert!(err.to_string().contains("acorn"), "got {err}");
}

#[test]
fn unmatched_localization_records_are_skipped_not_fatal() -> anyhow::Result<()> {
    let catalog = catalog_of(vec![catalog_item(1, "Acoustic Guitar", &[], None)]);
    let sheets = vec![items_sheet(
        "Tools",
        vec![
            record("Tool_1", "acoustic guitar"),
            record("Tool_2", "unreleased prototype"),
        ],
    )];

    let all = bundles(&catalog, &VariantData::new(), sheets)?;
    let bundle = &all[&Locale::EnGb];
    assert_eq!(bundle.items.len(), 1);
    assert!(bundle.items.contains_key(&1));
    Ok(())
}

#[test]
fn materials_are_resolved_and_localized() -> anyhow::Result<()> {
    let catalog = catalog_of(vec![
        catalog_item(
            1,
            "Log Stool",
            &[],
            Some(r#"[2, "DIY recipe", [4, "wood"], [1, "clay"]]"#),
        ),
        catalog_item(2, "Wood", &[], None),
        catalog_item(3, "Clay", &[], None),
    ]);
    let sheets = vec![items_sheet(
        "Crafting Items",
        vec![
            record("Ftr_1", "log stool"),
            record("Mat_1", "wood"),
            record("Mat_2", "clay"),
        ],
    )];

    let all = bundles(&catalog, &VariantData::new(), sheets)?;
    let de = &all[&Locale::De];
    assert_eq!(de.materials["wood"], "De wood");
    assert_eq!(de.materials["clay"], "De clay");
    // Materials are keyed by the catalog's material name in every locale.
    assert_eq!(all[&Locale::Ja].materials["wood"], "Ja wood");
    Ok(())
}

#[test]
fn pipeline_output_is_idempotent() -> anyhow::Result<()> {
    let build = || -> anyhow::Result<String> {
        let catalog = catalog_of(vec![
            catalog_item(10, "Log Stool", &[2], None),
            catalog_item(5001, "Acoustic Guitar", &[], None),
        ]);
        let payloads: VariantData = [(
            10,
            VariantPayload::Single(vec!["red".to_string(), "blue".to_string()]),
        )]
        .into();
        let sheets = vec![
            items_sheet(
                "Furniture",
                vec![
                    record("Ftr_00010", "log stool"),
                    record("Tool_00001", "acoustic guitar"),
                ],
            ),
            variant_sheet(
                "Item Variant Names",
                BaseRule::FirstTwoSegments,
                vec![
                    record("Ftr_00010_0", "red"),
                    record("Ftr_00010_1", "blue"),
                ],
            ),
        ];
        let all = bundles(&catalog, &payloads, sheets)?;
        let mut out = String::new();
        for (locale, bundle) in &all {
            out.push_str(locale.as_str());
            out.push('\n');
            out.push_str(&serde_json::to_string_pretty(bundle)?);
            out.push('\n');
        }
        Ok(out)
    };

    assert_eq!(build()?, build()?);
    Ok(())
}
