//! Form Field Policy
//!
//! Which optional widgets a wizard page renders for a category. Every
//! lookup tries the category id, then its voucher base category, then
//! `others`, so a policy is always returned.

pub mod general_info;
pub mod product_info;
pub mod tech_info;

pub use general_info::{get_general_info_config, GeneralInfoConfig};
pub use product_info::{get_product_info_config, ProductInfoConfig};
pub use tech_info::{get_tech_info_config, TechInfoConfig};

use serde::Serialize;

use crate::domain::category::Category;

/// All three page policies of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPolicy {
    pub general_info: &'static GeneralInfoConfig,
    pub product_info: &'static ProductInfoConfig,
    pub tech_info: &'static TechInfoConfig,
}

impl FormPolicy {
    pub fn for_category(category: &Category) -> Self {
        Self {
            general_info: general_info::resolve(category),
            product_info: product_info::resolve(category),
            tech_info: tech_info::resolve(category),
        }
    }
}
