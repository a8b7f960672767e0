use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::descriptor::{CategoryDescriptor, StepApiPaths};
use crate::domain::steps::StepName;
use crate::enums::category_kind::VOUCHER_SUFFIX;
use crate::enums::CategoryKind;

/// Category every failed lookup ends at
pub const FALLBACK_CATEGORY: &str = "others";

/// Generic draft update, used when a category has no dedicated step path
pub const UPDATE_PRODUCT_PATH: &str = "product/update_product";

const OTHERS_DESCRIPTOR: CategoryDescriptor = CategoryDescriptor {
    id: FALLBACK_CATEGORY,
    kind: CategoryKind::Product,
    subcategory_endpoint: None,
    product_type_label: "Others",
    feature_endpoint: Some("otherfeature/get_other_features"),
    step_api_paths: None,
};

static OTHERS: CategoryDescriptor = OTHERS_DESCRIPTOR;

const fn product(
    id: &'static str,
    subcategory_endpoint: &'static str,
    product_type_label: &'static str,
    feature_endpoint: &'static str,
) -> CategoryDescriptor {
    CategoryDescriptor {
        id,
        kind: CategoryKind::Product,
        subcategory_endpoint: Some(subcategory_endpoint),
        product_type_label,
        feature_endpoint: Some(feature_endpoint),
        step_api_paths: None,
    }
}

static DESCRIPTORS: &[CategoryDescriptor] = &[
    product(
        "textile",
        "subcategory/getsubcategory",
        "Textile",
        "textilefeature/get_textile_features",
    ),
    product(
        "officesupply",
        "officesupply/get_officesupply_subcategory",
        "Office Supply",
        "officesupplyfeature/get_officesupply_features",
    ),
    product(
        "lifestyle",
        "lifestyle/get_lifestyle_subcategory",
        "Lifestyle",
        "lifestylefeature/get_lifestyle_features",
    ),
    product(
        "electronics",
        "electronics/get_electronics_subcategory",
        "Electronics",
        "electronicsfeature/get_electronics_features",
    ),
    product(
        "fmcg",
        "fmcg/get_fmcg_subcategory",
        "FMCG",
        "fmcgfeature/get_fmcg_features",
    ),
    product(
        "mobility",
        "mobility/get_mobility_subcategory",
        "Mobility",
        "mobilityfeature/get_mobility_features",
    ),
    product(
        "restaurant",
        "restaurant/get_restaurant_subcategory",
        "Restaurant",
        "restaurantfeature/get_restaurant_features",
    ),
    product(
        "airlinetickets",
        "airline/get_airline_subcategory",
        "Airline Tickets",
        "airlinefeature/get_airline_features",
    ),
    product(
        "entertainment",
        "entertainment/get_entertainment_subcategory",
        "Entertainment & Events",
        "entertainmentfeature/get_entertainment_features",
    ),
    CategoryDescriptor {
        id: "hotels",
        kind: CategoryKind::Product,
        subcategory_endpoint: Some("hotel/get_hotel_subcategory"),
        product_type_label: "Hotels",
        feature_endpoint: Some("hotelfeature/get_hotel_features"),
        step_api_paths: Some(StepApiPaths {
            product_info: "product/hotel_product_info",
            tech_info: "product/hotel_tech_info",
            go_live: "product/hotel_go_live",
        }),
    },
    CategoryDescriptor {
        id: "mediaonline",
        kind: CategoryKind::MediaOnline,
        subcategory_endpoint: Some("mediaonline/get_mediaonline_subcategory"),
        product_type_label: "Media Online",
        feature_endpoint: Some("mediaonlinefeature/get_mediaonline_features"),
        step_api_paths: Some(StepApiPaths {
            product_info: "product/mediaonline_product_info",
            tech_info: "product/mediaonline_tech_info",
            go_live: "product/mediaonline_go_live",
        }),
    },
    CategoryDescriptor {
        id: "mediaoffline",
        kind: CategoryKind::MediaOffline,
        subcategory_endpoint: Some("mediaoffline/get_mediaoffline_subcategory"),
        product_type_label: "Media Offline",
        feature_endpoint: Some("mediaofflinefeature/get_mediaoffline_features"),
        step_api_paths: Some(StepApiPaths {
            product_info: "product/mediaoffline_product_info",
            tech_info: "product/mediaoffline_tech_info",
            go_live: "product/mediaoffline_go_live",
        }),
    },
    CategoryDescriptor {
        id: "hotelsVoucher",
        kind: CategoryKind::HotelVoucher,
        subcategory_endpoint: Some("hotel/get_hotel_subcategory"),
        product_type_label: "Hotel Voucher",
        feature_endpoint: Some("hotelfeature/get_hotel_features"),
        step_api_paths: Some(StepApiPaths {
            product_info: "product/hotel_voucher_product_info",
            tech_info: "product/hotel_voucher_tech_info",
            go_live: "product/hotel_voucher_go_live",
        }),
    },
    OTHERS_DESCRIPTOR,
];

/// Voucher id prefix (id without the `Voucher` suffix) -> base category
static VOUCHER_BASES: &[(&str, &str)] = &[
    ("textile", "textile"),
    ("officesupply", "officesupply"),
    ("lifestyle", "lifestyle"),
    ("electronics", "electronics"),
    ("fmcg", "fmcg"),
    ("mobility", "mobility"),
    ("airline", "airlinetickets"),
    ("hotels", "hotels"),
    ("qsr", "restaurant"),
    ("ee", FALLBACK_CATEGORY),
    ("other", FALLBACK_CATEGORY),
];

static INDEX: Lazy<HashMap<&'static str, &'static CategoryDescriptor>> =
    Lazy::new(|| DESCRIPTORS.iter().map(|d| (d.id, d)).collect());

/// Registered descriptor for an exact id
pub fn find_descriptor(category_id: &str) -> Option<&'static CategoryDescriptor> {
    INDEX.get(category_id).copied()
}

/// Base category of a voucher id, `None` for non-voucher or unmapped ids
pub fn voucher_base_category(category_id: &str) -> Option<&'static str> {
    let prefix = category_id.strip_suffix(VOUCHER_SUFFIX)?;
    VOUCHER_BASES
        .iter()
        .find(|(voucher_prefix, _)| *voucher_prefix == prefix)
        .map(|(_, base)| *base)
}

/// A raw category id resolved once into its kind and fallback chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: String,
    kind: CategoryKind,
    base_id: Option<&'static str>,
}

impl Category {
    pub fn resolve(category_id: &str) -> Self {
        let kind = find_descriptor(category_id)
            .map(|d| d.kind)
            .unwrap_or_else(|| CategoryKind::classify(category_id));

        Self {
            id: category_id.to_string(),
            kind,
            base_id: voucher_base_category(category_id),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn base_id(&self) -> Option<&'static str> {
        self.base_id
    }

    /// Ids tried in order by every lookup: the id itself, its voucher base, `others`
    pub fn lookup_keys(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.id.as_str())
            .chain(self.base_id)
            .chain(std::iter::once(FALLBACK_CATEGORY))
    }

    /// First item of `table` keyed by a lookup key
    pub fn pick<'t, T>(&self, table: &'t [(&'static str, T)]) -> Option<&'t T> {
        self.lookup_keys().find_map(|key| {
            table
                .iter()
                .find(|(table_key, _)| *table_key == key)
                .map(|(_, value)| value)
        })
    }

    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        self.lookup_keys()
            .find_map(find_descriptor)
            .unwrap_or(&OTHERS)
    }

    pub fn subcategory_endpoint(&self) -> Option<&'static str> {
        self.descriptor().subcategory_endpoint
    }

    pub fn feature_endpoint(&self) -> Option<&'static str> {
        self.descriptor().feature_endpoint
    }

    pub fn product_type_label(&self) -> &'static str {
        self.descriptor().product_type_label
    }

    pub fn step_api_path(&self, step: StepName) -> Option<&'static str> {
        self.descriptor()
            .step_api_paths
            .and_then(|paths| paths.for_step(step))
    }

    /// Path a step is saved to, falling back to the generic update endpoint
    pub fn update_path(&self, step: StepName) -> &'static str {
        self.step_api_path(step).unwrap_or(UPDATE_PRODUCT_PATH)
    }
}

pub fn get_subcategory_endpoint(category: &str) -> Option<&'static str> {
    Category::resolve(category).subcategory_endpoint()
}

pub fn get_feature_endpoint(category: &str) -> Option<&'static str> {
    Category::resolve(category).feature_endpoint()
}

pub fn get_product_type_label(category: &str) -> &'static str {
    Category::resolve(category).product_type_label()
}

/// Step API path for `step` ("productInfo", "tech-info", "goLive", ...)
pub fn get_step_api_path(category: &str, step: &str) -> Option<&'static str> {
    let step = StepName::parse(step)?;
    Category::resolve(category).step_api_path(step)
}
