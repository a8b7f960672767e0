use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::steps::StepName;
use crate::enums::ProductUploadStatus;

// ============================================================================
// Draft
// ============================================================================

/// Listing draft as the product service stores it.
///
/// Only the keys the wizard itself reads are typed; everything a step
/// page submits travels in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "ProductCategoryName", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "ProductUploadStatus", default, skip_serializing_if = "Option::is_none")]
    pub upload_status: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Keys a step payload may not overwrite
const RESERVED_KEYS: &[&str] = &["_id", "ProductCategoryName", "ProductUploadStatus"];

/// Keys that wrap the draft in the different service responses
const ENVELOPE_KEYS: &[&str] = &["data", "body", "product", "result"];

impl ProductDraft {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: None,
            upload_status: None,
            fields: Map::new(),
        }
    }

    /// Parsed progress marker; unknown markers read as `None`
    pub fn status(&self) -> Option<ProductUploadStatus> {
        self.upload_status
            .as_deref()
            .and_then(ProductUploadStatus::from_code)
    }

    pub fn set_status(&mut self, status: ProductUploadStatus) {
        self.upload_status = Some(status.code().to_string());
    }

    /// Merge a step's submitted fields over the stored ones.
    /// Returns the keys that were skipped because they are reserved.
    pub fn merge_step(&mut self, fields: Map<String, Value>) -> Vec<String> {
        let mut skipped = Vec::new();
        for (key, value) in fields {
            if RESERVED_KEYS.contains(&key.as_str()) {
                skipped.push(key);
                continue;
            }
            self.fields.insert(key, value);
        }
        skipped
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Body for `PUT product/update_product`
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Locate the draft inside a service response, unwrapping envelopes
    pub fn from_response(value: &Value) -> Option<Self> {
        Self::find_in(value, 0)
    }

    fn find_in(value: &Value, depth: usize) -> Option<Self> {
        let object = value.as_object()?;
        if object.contains_key("_id") {
            return serde_json::from_value(value.clone()).ok();
        }
        if depth >= 3 {
            return None;
        }
        ENVELOPE_KEYS
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(|inner| Self::find_in(inner, depth + 1))
    }
}

/// Progress marker written when `step` is saved.
///
/// Go-live submits the listing for approval unless another page (voucher
/// design) still follows it.
pub fn status_after_step(step: StepName, has_next: bool) -> ProductUploadStatus {
    match step {
        StepName::GeneralInfo => ProductUploadStatus::ProductInformation,
        StepName::ProductInfo => ProductUploadStatus::TechnicalInformation,
        StepName::TechInfo => ProductUploadStatus::GoLive,
        StepName::GoLive if has_next => ProductUploadStatus::GoLive,
        StepName::GoLive | StepName::VoucherDesign => ProductUploadStatus::PendingApproval,
    }
}
