pub mod product_client;
pub mod upload;

pub use product_client::ProductServiceClient;
pub use upload::{MultipartUpload, UploadFile};

use async_trait::async_trait;
use contracts::domain::draft::ProductDraft;
use contracts::shared::normalize::{ExtractionRules, OptionItem};
use serde_json::Value;

use crate::error::ClientError;

pub const GET_PRODUCT_PATH: &str = "product/get_product_byId";
pub const CREATE_PRODUCT_PATH: &str = "product/product_mutation";

/// Calls the wizard makes against the product service
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Current state of a draft
    async fn get_product_by_id(&self, id: &str) -> Result<ProductDraft, ClientError>;

    /// Create a draft; the service assigns its id
    async fn create_product(&self, payload: Value) -> Result<ProductDraft, ClientError>;

    /// PUT a full draft payload to `path` and return the raw response
    async fn update_product(&self, path: &str, payload: Value) -> Result<Value, ClientError>;

    /// GET an option list endpoint and normalize it
    async fn fetch_options(
        &self,
        endpoint: &str,
        rules: &ExtractionRules,
    ) -> Result<Vec<OptionItem>, ClientError>;

    /// Multipart POST to `endpoint`
    async fn upload(&self, endpoint: &str, upload: MultipartUpload) -> Result<Value, ClientError>;
}
