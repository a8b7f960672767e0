use std::time::Duration;

use async_trait::async_trait;
use contracts::domain::draft::ProductDraft;
use contracts::shared::normalize::{extract_options, ExtractionRules, OptionItem};
use reqwest::multipart::{Form, Part};
use reqwest::{header, Method, RequestBuilder};
use serde_json::Value;

use super::upload::MultipartUpload;
use super::{ProductService, CREATE_PRODUCT_PATH, GET_PRODUCT_PATH};
use crate::config::BackendConfig;
use crate::error::ClientError;

/// HTTP client for the product service
#[derive(Debug, Clone)]
pub struct ProductServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    login_url: Option<String>,
}

impl ProductServiceClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            login_url: config.login_url.clone(),
        })
    }

    /// Absolute URL of a service path such as `product/update_product`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Login page to send the seller to when the service rejected the session
    pub fn login_redirect(&self, error: &ClientError) -> Option<&str> {
        match error.status() {
            Some(401) => self.login_url.as_deref(),
            _ => None,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match &self.api_key {
            Some(key) => builder.header(header::AUTHORIZATION, format!("Bearer {}", key)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(
                "Product service rejected the session, login at {}",
                self.login_url.as_deref().unwrap_or("<not configured>")
            );
        } else if !status.is_success() {
            tracing::warn!("Product service answered HTTP {}", status.as_u16());
        }
        if !status.is_success() {
            return Err(ClientError::from_status(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn draft_from(value: &Value) -> Result<ProductDraft, ClientError> {
        ProductDraft::from_response(value).ok_or_else(|| {
            ClientError::UnexpectedResponse("no product draft in response".to_string())
        })
    }
}

fn into_form(upload: MultipartUpload) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (key, value) in upload.text_fields {
        form = form.text(key, value);
    }
    for file in upload.files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| {
                ClientError::Validation(format!("Invalid file type {}: {}", file.mime_type, e))
            })?;
        form = form.part(upload.field_name.clone(), part);
    }
    Ok(form)
}

#[async_trait]
impl ProductService for ProductServiceClient {
    async fn get_product_by_id(&self, id: &str) -> Result<ProductDraft, ClientError> {
        if id.trim().is_empty() {
            return Err(ClientError::Validation("Draft id is required".to_string()));
        }
        let path = format!("{}/{}", GET_PRODUCT_PATH, urlencoding::encode(id));
        let value = self.send(self.request(Method::GET, &path)).await?;
        Self::draft_from(&value)
    }

    async fn create_product(&self, payload: Value) -> Result<ProductDraft, ClientError> {
        let value = self
            .send(self.request(Method::POST, CREATE_PRODUCT_PATH).json(&payload))
            .await?;
        let draft = Self::draft_from(&value)?;
        tracing::info!("Created product draft {}", draft.id);
        Ok(draft)
    }

    async fn update_product(&self, path: &str, payload: Value) -> Result<Value, ClientError> {
        let value = self
            .send(self.request(Method::PUT, path).json(&payload))
            .await?;
        tracing::info!("Saved product draft via {}", path);
        Ok(value)
    }

    async fn fetch_options(
        &self,
        endpoint: &str,
        rules: &ExtractionRules,
    ) -> Result<Vec<OptionItem>, ClientError> {
        let value = self.send(self.request(Method::GET, endpoint)).await?;
        match extract_options(&value, rules) {
            Some(options) => Ok(options),
            None => {
                tracing::warn!("No recognizable options in response of {}", endpoint);
                Ok(Vec::new())
            }
        }
    }

    async fn upload(&self, endpoint: &str, upload: MultipartUpload) -> Result<Value, ClientError> {
        let files = upload.files.len();
        let bytes = upload.total_bytes();
        let form = into_form(upload)?;
        let value = self
            .send(self.request(Method::POST, endpoint).multipart(form))
            .await?;
        tracing::info!("Uploaded {} file(s), {} bytes to {}", files, bytes, endpoint);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UploadFile;
    use axum::extract::{Multipart, Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use contracts::shared::normalize::SUBCATEGORY_RULES;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type ApiError = (StatusCode, Json<Value>);

    #[derive(Clone, Default)]
    struct MockState {
        drafts: Arc<Mutex<HashMap<String, Value>>>,
        auth: Arc<Mutex<Vec<String>>>,
        uploads: Arc<Mutex<Vec<(String, String, usize)>>>,
    }

    fn not_found() -> ApiError {
        (StatusCode::NOT_FOUND, Json(json!({"message": "Product not found"})))
    }

    async fn get_product(
        State(state): State<MockState>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Json<Value>, ApiError> {
        if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
            state.auth.lock().unwrap().push(auth.to_string());
        }
        if id == "expired-session" {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Session expired"})),
            ));
        }
        let draft = state.drafts.lock().unwrap().get(&id).cloned();
        draft
            .map(|d| Json(json!({"success": true, "data": d})))
            .ok_or_else(not_found)
    }

    async fn create_product(
        State(state): State<MockState>,
        Json(mut body): Json<Value>,
    ) -> Json<Value> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        body["_id"] = json!(id);
        state.drafts.lock().unwrap().insert(id, body.clone());
        Json(body)
    }

    async fn update_product(
        State(state): State<MockState>,
        Json(body): Json<Value>,
    ) -> Result<Json<Value>, ApiError> {
        let id = body["_id"].as_str().map(str::to_string).ok_or((
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "_id is required"})),
        ))?;
        let mut drafts = state.drafts.lock().unwrap();
        if !drafts.contains_key(&id) {
            return Err(not_found());
        }
        drafts.insert(id, body.clone());
        Ok(Json(json!({"message": "Product updated", "body": body})))
    }

    async fn subcategories() -> Json<Value> {
        Json(json!({"data": [
            {"_id": "1", "SubcategoryType": "Shirts"},
            {"_id": "2", "SubcategoryType": "Sarees"}
        ]}))
    }

    async fn upload_images(
        State(state): State<MockState>,
        mut multipart: Multipart,
    ) -> Json<Value> {
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.unwrap();
            state.uploads.lock().unwrap().push((name, file_name, data.len()));
        }
        Json(json!({"message": "Images uploaded"}))
    }

    async fn spawn_backend(state: MockState) -> String {
        let app = Router::new()
            .route("/api/v1/product/get_product_byId/:id", get(get_product))
            .route("/api/v1/product/product_mutation", post(create_product))
            .route("/api/v1/product/update_product", put(update_product))
            .route("/api/v1/subcategory/getsubcategory", get(subcategories))
            .route("/api/v1/product/upload_golive_images", post(upload_images))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/v1/", addr)
    }

    fn client(url: String) -> ProductServiceClient {
        ProductServiceClient::new(&BackendConfig {
            url,
            api_key: Some("test-key".to_string()),
            login_url: Some("https://example.com/login".to_string()),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_paths() {
        let client = client("http://localhost:7000/api/v1/".to_string());
        assert_eq!(
            client.url("/product/update_product"),
            "http://localhost:7000/api/v1/product/update_product"
        );
        assert_eq!(
            client.url("subcategory/getsubcategory"),
            "http://localhost:7000/api/v1/subcategory/getsubcategory"
        );
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let state = MockState::default();
        let client = client(spawn_backend(state.clone()).await);

        let created = client
            .create_product(json!({
                "ProductName": "Cotton shirt",
                "ProductCategoryName": "textile"
            }))
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        let fetched = client.get_product_by_id(&created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.category.as_deref(), Some("textile"));
        assert_eq!(fetched.field("ProductName"), Some(&json!("Cotton shirt")));
        assert_eq!(*state.auth.lock().unwrap(), vec!["Bearer test-key".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_draft_reports_service_message() {
        let client = client(spawn_backend(MockState::default()).await);

        let err = client.get_product_by_id("does-not-exist").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Product not found");

        let err = client.get_product_by_id(" ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_expired_session_points_to_login() {
        let client = client(spawn_backend(MockState::default()).await);

        let err = client.get_product_by_id("expired-session").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Session expired");
        assert_eq!(client.login_redirect(&err), Some("https://example.com/login"));

        let missing = client.get_product_by_id("does-not-exist").await.unwrap_err();
        assert_eq!(client.login_redirect(&missing), None);
    }

    #[tokio::test]
    async fn test_update_product() {
        let state = MockState::default();
        state
            .drafts
            .lock()
            .unwrap()
            .insert("d1".to_string(), json!({"_id": "d1"}));
        let client = client(spawn_backend(state.clone()).await);

        let response = client
            .update_product(
                "product/update_product",
                json!({"_id": "d1", "ProductUploadStatus": "technicalinformation"}),
            )
            .await
            .unwrap();
        assert_eq!(response["message"], json!("Product updated"));
        assert_eq!(
            state.drafts.lock().unwrap()["d1"]["ProductUploadStatus"],
            json!("technicalinformation")
        );

        let err = client
            .update_product("product/update_product", json!({"ProductName": "x"}))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "_id is required");
    }

    #[tokio::test]
    async fn test_fetch_options() {
        let client = client(spawn_backend(MockState::default()).await);
        let options = client
            .fetch_options("subcategory/getsubcategory", &SUBCATEGORY_RULES)
            .await
            .unwrap();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Shirts", "Sarees"]);
    }

    #[tokio::test]
    async fn test_multipart_upload() {
        let state = MockState::default();
        let client = client(spawn_backend(state.clone()).await);

        let upload = MultipartUpload::new("files")
            .text("id", "d1")
            .file(UploadFile::new("front.jpg", "image/jpeg", vec![0u8; 128]))
            .file(UploadFile::new("back.jpg", "image/jpeg", vec![0u8; 64]));
        let response = client
            .upload("product/upload_golive_images", upload)
            .await
            .unwrap();
        assert_eq!(response["message"], json!("Images uploaded"));

        let uploads = state.uploads.lock().unwrap().clone();
        assert_eq!(
            uploads,
            vec![
                ("id".to_string(), String::new(), 2),
                ("files".to_string(), "front.jpg".to_string(), 128),
                ("files".to_string(), "back.jpg".to_string(), 64),
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let client = client("http://127.0.0.1:1".to_string());
        let err = client.get_product_by_id("d1").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)), "{:?}", err);
    }
}
