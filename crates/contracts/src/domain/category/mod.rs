//! Category Registry
//!
//! Per-category metadata: subcategory and feature endpoints, product type
//! label and the per-step API paths. Unknown ids degrade to the `others`
//! record.

pub mod descriptor;
pub mod registry;

pub use descriptor::{CategoryDescriptor, StepApiPaths};
pub use registry::{
    find_descriptor, get_feature_endpoint, get_product_type_label, get_step_api_path,
    get_subcategory_endpoint, voucher_base_category, Category, FALLBACK_CATEGORY,
    UPDATE_PRODUCT_PATH,
};
