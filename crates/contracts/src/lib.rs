//! Category-driven configuration for the seller portal listing wizard
//!
//! Everything in this crate is pure: static lookup tables plus the
//! derivations the wizard pages run on submitted values. Network access
//! lives in the `listing-client` crate.

pub mod domain;
pub mod enums;
pub mod shared;

pub use domain::category::{
    get_feature_endpoint, get_product_type_label, get_step_api_path, get_subcategory_endpoint,
    Category, CategoryDescriptor,
};
pub use domain::field_policy::{
    get_general_info_config, get_product_info_config, get_tech_info_config,
};
pub use domain::steps::{get_prev_next_step_paths, PrevNext, StepName};
