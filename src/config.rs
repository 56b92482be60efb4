use crate::composite::{BaseRule, IdPolicy};
use crate::tables::Axis;

/// What ingestion does with one category sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Rows are item records.
    Items,
    /// Rows are adjective records for one axis.
    Adjectives {
        axis: Axis,
        base: BaseRule,
        policy: IdPolicy,
    },
    /// Rows are item records whose whole family shares the variant names
    /// encoded under one representative base id.
    SharedVariantItems { representative: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub name: &'static str,
    pub kind: CategoryKind,
}

pub const ITEM_CATEGORIES: &[&str] = &[
    "Art",
    "Bug Models",
    "Bugs",
    "Crafting Items",
    "Dishes",
    "Door Deco",
    "Etc",
    "Event Items",
    "Fencing",
    "Fish Models",
    "Fish",
    "Floors",
    "Fossils",
    "Furniture",
    "Gyroids",
    "Money",
    "Music",
    "Plants",
    "Posters",
    "Rugs",
    "Sea Creatures",
    "Shells",
    "Tools",
    "Turnips",
    "Umbrellas",
    "Wallpaper",
];

pub const CLOTHING_CATEGORIES: &[&str] = &[
    "Accessories",
    "Bags",
    "Bottoms",
    "Caps",
    "Dress-Up",
    "Handbags",
    "Helmets",
    "Shoes",
    "Socks",
    "Tops",
    "Wetsuits",
];

// Sheet names verbatim: every clothing category has one "<name> Variants"
// sheet, all single-axis.
pub const CLOTHING_VARIANT_CATEGORIES: &[&str] = &[
    "Accessories Variants",
    "Bags Variants",
    "Bottoms Variants",
    "Caps Variants",
    "Dress-Up Variants",
    "Handbags Variants",
    "Helmets Variants",
    "Shoes Variants",
    "Socks Variants",
    "Tops Variants",
    "Wetsuits Variants",
];

/// All photo items share the variant set encoded under this base id.
pub const SHARED_VARIANT_REPRESENTATIVE: &str = "Bromide_06426";

/// Every sheet to load, in ingestion order. Adjective sheets come before the
/// shared-variant items that clone from them.
pub fn load_plan() -> Vec<CategorySpec> {
    let mut plan = Vec::new();
    for &name in ITEM_CATEGORIES {
        plan.push(CategorySpec {
            name,
            kind: CategoryKind::Items,
        });
    }
    plan.push(CategorySpec {
        name: "Item Variant Names",
        kind: CategoryKind::Adjectives {
            axis: Axis::Variant,
            base: BaseRule::FirstTwoSegments,
            policy: IdPolicy::Strict,
        },
    });
    plan.push(CategorySpec {
        name: "Item Pattern Names",
        kind: CategoryKind::Adjectives {
            axis: Axis::Pattern,
            base: BaseRule::FirstTwoSegments,
            policy: IdPolicy::Lenient,
        },
    });
    plan.push(CategorySpec {
        name: "Photos",
        kind: CategoryKind::SharedVariantItems {
            representative: SHARED_VARIANT_REPRESENTATIVE,
        },
    });
    for &name in CLOTHING_CATEGORIES {
        plan.push(CategorySpec {
            name,
            kind: CategoryKind::Items,
        });
    }
    for &name in CLOTHING_VARIANT_CATEGORIES {
        plan.push(CategorySpec {
            name,
            kind: CategoryKind::Adjectives {
                axis: Axis::Variant,
                base: BaseRule::FirstSegment,
                policy: IdPolicy::Strict,
            },
        });
    }
    plan
}
