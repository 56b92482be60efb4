use crate::model::{BundleEntry, Locale, LocaleBundle, LocalizationRecord, LocalizedAdjectives};
use crate::normalize::capitalize_name;
use crate::resolve::{AxisRefs, ResolvedAdjectives, ResolvedItem};
use std::collections::BTreeMap;

/// Projects the resolved structures into one locale's bundle. Missing
/// per-locale strings come through as empty strings, never omitted entries.
pub fn emit_locale(
    locale: Locale,
    resolved: &[ResolvedItem<'_>],
    materials: &[(String, &LocalizationRecord)],
) -> LocaleBundle {
    let localize = |record: &LocalizationRecord| capitalize_name(record.text(locale));

    let mut items = BTreeMap::new();
    for item in resolved {
        let adjectives = item.adjectives.as_ref().map(|adjectives| match adjectives {
            ResolvedAdjectives::Single(records) => {
                LocalizedAdjectives::Single(records.iter().map(|r| localize(r)).collect())
            }
            ResolvedAdjectives::Dual(variants, patterns) => LocalizedAdjectives::Dual(
                axis_strings(variants, &localize),
                axis_strings(patterns, &localize),
            ),
        });
        items.insert(
            item.canonical_id,
            BundleEntry {
                item: localize(item.record),
                adjectives,
            },
        );
    }

    let materials = materials
        .iter()
        .map(|(name, record)| (name.clone(), localize(record)))
        .collect();

    LocaleBundle { items, materials }
}

fn axis_strings(
    axis: &AxisRefs<'_>,
    localize: &impl Fn(&LocalizationRecord) -> String,
) -> Vec<String> {
    match axis {
        AxisRefs::Collapsed => vec![String::new()],
        AxisRefs::Joined(records) => records.iter().map(|r| localize(r)).collect(),
    }
}
