use serde::{Deserialize, Serialize};

/// Progress marker stored on the draft as `ProductUploadStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUploadStatus {
    ProductInformation,
    TechnicalInformation,
    GoLive,
    PendingApproval,
    Completed,
}

impl ProductUploadStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductUploadStatus::ProductInformation => "productinformation",
            ProductUploadStatus::TechnicalInformation => "technicalinformation",
            ProductUploadStatus::GoLive => "golive",
            ProductUploadStatus::PendingApproval => "pendingapproval",
            ProductUploadStatus::Completed => "completed",
        }
    }

    pub fn all() -> Vec<ProductUploadStatus> {
        vec![
            ProductUploadStatus::ProductInformation,
            ProductUploadStatus::TechnicalInformation,
            ProductUploadStatus::GoLive,
            ProductUploadStatus::PendingApproval,
            ProductUploadStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "productinformation" => Some(ProductUploadStatus::ProductInformation),
            "technicalinformation" => Some(ProductUploadStatus::TechnicalInformation),
            "golive" => Some(ProductUploadStatus::GoLive),
            "pendingapproval" => Some(ProductUploadStatus::PendingApproval),
            "completed" => Some(ProductUploadStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductUploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
