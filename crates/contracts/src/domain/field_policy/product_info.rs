use serde::Serialize;

use crate::domain::category::Category;

pub const APPAREL_SIZES: &[&str] = &["Free Size", "XS", "S", "M", "L", "XL", "XXL", "XXXL"];
pub const DIMENSION_SIZES: &[&str] = &["Length x Height x Width", "Length x Width", "Length"];
pub const LENGTH_UNITS: &[&str] = &["mm", "cm", "inch", "ft", "m"];
pub const WEIGHT_UNITS: &[&str] = &["gm", "kg"];
pub const VOLUME_UNITS: &[&str] = &["ml", "ltr"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfoConfig {
    /// Size or dimension choices, in display order
    pub size_options: &'static [&'static str],
    pub measurement_units: &'static [&'static str],
    pub has_color_picker: bool,
    pub has_product_id: bool,
    pub has_sample_provision: bool,
    pub has_size_chart: bool,
}

const SERVICE: ProductInfoConfig = ProductInfoConfig {
    size_options: &[],
    measurement_units: &[],
    has_color_picker: false,
    has_product_id: false,
    has_sample_provision: false,
    has_size_chart: false,
};

const GOODS: ProductInfoConfig = ProductInfoConfig {
    size_options: DIMENSION_SIZES,
    measurement_units: LENGTH_UNITS,
    has_color_picker: true,
    has_product_id: true,
    has_sample_provision: true,
    has_size_chart: false,
};

const OTHERS_ENTRY: ProductInfoConfig = ProductInfoConfig {
    size_options: &["Length x Height x Width", "Weight", "Free Size"],
    measurement_units: &["mm", "cm", "inch", "gm", "kg"],
    has_sample_provision: false,
    ..GOODS
};

static OTHERS: ProductInfoConfig = OTHERS_ENTRY;

static TABLE: &[(&str, ProductInfoConfig)] = &[
    (
        "textile",
        ProductInfoConfig {
            size_options: APPAREL_SIZES,
            measurement_units: &["cm", "inch"],
            has_size_chart: true,
            ..GOODS
        },
    ),
    (
        "lifestyle",
        ProductInfoConfig {
            size_options: &["Free Size", "S", "M", "L", "XL", "Length x Width"],
            has_size_chart: true,
            ..GOODS
        },
    ),
    ("officesupply", GOODS),
    (
        "electronics",
        ProductInfoConfig {
            size_options: &["Length x Height x Width", "Length x Width", "Screen Size"],
            ..GOODS
        },
    ),
    (
        "fmcg",
        ProductInfoConfig {
            size_options: &["Weight", "Volume", "Count"],
            measurement_units: &["gm", "kg", "ml", "ltr", "pcs"],
            has_color_picker: false,
            ..GOODS
        },
    ),
    (
        "mobility",
        ProductInfoConfig {
            size_options: &["Length x Height x Width"],
            measurement_units: &["mm", "cm", "m"],
            has_sample_provision: false,
            ..GOODS
        },
    ),
    ("restaurant", SERVICE),
    ("hotels", SERVICE),
    ("airlinetickets", SERVICE),
    ("entertainment", SERVICE),
    (
        "mediaonline",
        ProductInfoConfig {
            size_options: &["Seconds", "Minutes", "Slots"],
            ..SERVICE
        },
    ),
    (
        "mediaoffline",
        ProductInfoConfig {
            size_options: &["Length x Height", "Sq. ft"],
            measurement_units: &["ft", "m"],
            ..SERVICE
        },
    ),
    ("others", OTHERS_ENTRY),
];

pub(super) fn resolve(category: &Category) -> &'static ProductInfoConfig {
    category.pick(TABLE).unwrap_or(&OTHERS)
}

pub fn get_product_info_config(category: &str) -> &'static ProductInfoConfig {
    resolve(&Category::resolve(category))
}
