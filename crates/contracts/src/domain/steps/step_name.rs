use serde::{Deserialize, Serialize};

/// One page of the listing wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepName {
    GeneralInfo,
    ProductInfo,
    TechInfo,
    GoLive,
    VoucherDesign,
}

impl StepName {
    /// Order of the plain product flow
    pub const LINEAR: [StepName; 4] = [
        StepName::GeneralInfo,
        StepName::ProductInfo,
        StepName::TechInfo,
        StepName::GoLive,
    ];

    /// Parse the names pages pass around: "general-info", "generalInformation",
    /// "goLive", "tech_info", "TechnicalInformation", ...
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "generalinfo" | "generalinformation" => Some(StepName::GeneralInfo),
            "productinfo" | "productinformation" => Some(StepName::ProductInfo),
            "techinfo" | "technicalinfo" | "technicalinformation" => Some(StepName::TechInfo),
            "golive" => Some(StepName::GoLive),
            "voucherdesign" => Some(StepName::VoucherDesign),
            _ => None,
        }
    }

    /// Canonical slug in the linear product flow
    pub fn slug(&self) -> &'static str {
        match self {
            StepName::GeneralInfo => "general-info",
            StepName::ProductInfo => "product-info",
            StepName::TechInfo => "tech-info",
            StepName::GoLive => "go-live",
            StepName::VoucherDesign => "voucherdesign",
        }
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
