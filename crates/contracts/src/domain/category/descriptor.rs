use serde::Serialize;

use crate::domain::steps::StepName;
use crate::enums::CategoryKind;

/// Backend paths used to save the product-info, tech-info and go-live steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepApiPaths {
    pub product_info: &'static str,
    pub tech_info: &'static str,
    pub go_live: &'static str,
}

impl StepApiPaths {
    /// Path for a step; general info and voucher design are not covered
    pub fn for_step(&self, step: StepName) -> Option<&'static str> {
        match step {
            StepName::ProductInfo => Some(self.product_info),
            StepName::TechInfo => Some(self.tech_info),
            StepName::GoLive => Some(self.go_live),
            StepName::GeneralInfo | StepName::VoucherDesign => None,
        }
    }
}

/// Static description of one listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub kind: CategoryKind,
    pub subcategory_endpoint: Option<&'static str>,
    pub product_type_label: &'static str,
    pub feature_endpoint: Option<&'static str>,
    pub step_api_paths: Option<StepApiPaths>,
}
