use serde::Serialize;

use crate::domain::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechInfoConfig {
    pub has_packaging_dimensions: bool,
    pub has_weight_before_packing: bool,
    pub has_warranty: bool,
    pub has_shelf_life: bool,
    pub has_care_instructions: bool,
    pub dimension_units: &'static [&'static str],
    pub weight_units: &'static [&'static str],
}

const NONE: TechInfoConfig = TechInfoConfig {
    has_packaging_dimensions: false,
    has_weight_before_packing: false,
    has_warranty: false,
    has_shelf_life: false,
    has_care_instructions: false,
    dimension_units: &[],
    weight_units: &[],
};

const SHIPPED: TechInfoConfig = TechInfoConfig {
    has_packaging_dimensions: true,
    has_weight_before_packing: true,
    dimension_units: &["mm", "cm", "inch"],
    weight_units: &["gm", "kg"],
    ..NONE
};

static OTHERS: TechInfoConfig = SHIPPED;

static TABLE: &[(&str, TechInfoConfig)] = &[
    (
        "textile",
        TechInfoConfig {
            has_care_instructions: true,
            ..SHIPPED
        },
    ),
    (
        "lifestyle",
        TechInfoConfig {
            has_care_instructions: true,
            ..SHIPPED
        },
    ),
    ("officesupply", SHIPPED),
    (
        "electronics",
        TechInfoConfig {
            has_warranty: true,
            ..SHIPPED
        },
    ),
    (
        "fmcg",
        TechInfoConfig {
            has_shelf_life: true,
            ..SHIPPED
        },
    ),
    (
        "mobility",
        TechInfoConfig {
            has_warranty: true,
            dimension_units: &["mm", "cm", "m"],
            weight_units: &["kg"],
            ..SHIPPED
        },
    ),
    ("restaurant", NONE),
    ("hotels", NONE),
    ("airlinetickets", NONE),
    ("entertainment", NONE),
    ("mediaonline", NONE),
    (
        "mediaoffline",
        TechInfoConfig {
            dimension_units: &["ft", "m"],
            ..NONE
        },
    ),
    ("others", SHIPPED),
];

pub(super) fn resolve(category: &Category) -> &'static TechInfoConfig {
    category.pick(TABLE).unwrap_or(&OTHERS)
}

pub fn get_tech_info_config(category: &str) -> &'static TechInfoConfig {
    resolve(&Category::resolve(category))
}
