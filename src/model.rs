use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// One row of the canonical catalog. `variants` holds the declared size of
/// each variation axis (zero, one or two axes); the variant *names* live in
/// the separate payload file, keyed by the same id.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub variants: Vec<u32>,
    #[serde(default)]
    pub recipe: Option<Vec<RecipeEntry>>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecipeEntry {
    Requirement(u32, String),
    Count(u32),
    Text(String),
}

impl CatalogItem {
    /// Material names from the recipe. Requirement pairs start after the two
    /// header slots at the front of the list.
    pub fn requirement_names(&self) -> impl Iterator<Item = &str> {
        self.recipe
            .as_deref()
            .unwrap_or_default()
            .iter()
            .skip(2)
            .filter_map(|entry| match entry {
                RecipeEntry::Requirement(_, name) => Some(name.as_str()),
                _ => None,
            })
    }
}

/// Variant names declared for a catalog item: a single axis list, or a
/// variant-axis list plus a pattern-axis list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariantPayload {
    Dual(Vec<String>, Vec<String>),
    Single(Vec<String>),
}

/// The configured output locales. `as_str` doubles as the bundle file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    De,
    EnGb,
    EsEu,
    EsUs,
    FrEu,
    FrUs,
    It,
    Ja,
    Ko,
    Nl,
    Ru,
    ZhCn,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 13] = [
        Locale::De,
        Locale::EnGb,
        Locale::EsEu,
        Locale::EsUs,
        Locale::FrEu,
        Locale::FrUs,
        Locale::It,
        Locale::Ja,
        Locale::Ko,
        Locale::Nl,
        Locale::Ru,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::EnGb => "en-gb",
            Locale::EsEu => "es-eu",
            Locale::EsUs => "es-us",
            Locale::FrEu => "fr-eu",
            Locale::FrUs => "fr-us",
            Locale::It => "it",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Nl => "nl",
            Locale::Ru => "ru",
            Locale::ZhCn => "zh-cn",
            Locale::ZhTw => "zh-tw",
        }
    }
}

/// One localization source row: a composite id plus one name column per
/// source locale. `us_en` is the reference locale used for matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizationRecord {
    pub id: String,
    pub eu_de: String,
    pub eu_en: String,
    pub eu_it: String,
    pub eu_nl: String,
    pub eu_ru: String,
    pub eu_fr: String,
    pub eu_es: String,
    pub us_en: String,
    pub us_fr: String,
    pub us_es: String,
    pub jp_ja: String,
    pub kr_ko: String,
    pub tw_zh: String,
    pub cn_zh: String,
}

impl LocalizationRecord {
    pub fn reference_name(&self) -> &str {
        &self.us_en
    }

    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::De => &self.eu_de,
            Locale::EnGb => &self.eu_en,
            Locale::EsEu => &self.eu_es,
            Locale::EsUs => &self.us_es,
            Locale::FrEu => &self.eu_fr,
            Locale::FrUs => &self.us_fr,
            Locale::It => &self.eu_it,
            Locale::Ja => &self.jp_ja,
            Locale::Ko => &self.kr_ko,
            Locale::Nl => &self.eu_nl,
            Locale::Ru => &self.eu_ru,
            Locale::ZhCn => &self.cn_zh,
            Locale::ZhTw => &self.tw_zh,
        }
    }
}

/// Localized adjective lists in their output shape: one list for a single
/// axis, a pair of lists for dual-axis items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocalizedAdjectives {
    Single(Vec<String>),
    Dual(Vec<String>, Vec<String>),
}

/// One bundle item, encoded compactly as `[name]` or `[name, adjectives]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleEntry {
    pub item: String,
    pub adjectives: Option<LocalizedAdjectives>,
}

impl Serialize for BundleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.adjectives.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.item)?;
        if let Some(adjectives) = &self.adjectives {
            seq.serialize_element(adjectives)?;
        }
        seq.end()
    }
}

/// The per-locale output artifact. BTreeMaps keep the serialized form
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleBundle {
    pub items: BTreeMap<u32, BundleEntry>,
    pub materials: BTreeMap<String, String>,
}
