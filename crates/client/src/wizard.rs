//! Step sequencing of the listing wizard
//!
//! Every save follows the same order: fetch the draft, validate and merge
//! the step's fields, write the progress marker, PUT the draft back and
//! work out where the seller goes next.

use contracts::domain::category::Category;
use contracts::domain::draft::{status_after_step, ProductDraft};
use contracts::domain::field_policy::FormPolicy;
use contracts::domain::steps::{
    media_product_info_slug, resolve_step_paths, topology_for, PrevNext, StepName,
};
use contracts::domain::upload::UploadKind;
use contracts::shared::normalize::{OptionItem, FEATURE_RULES, SUBCATEGORY_RULES};
use contracts::shared::validation::validate_step_fields;
use serde_json::{Map, Value};

use crate::api::{MultipartUpload, ProductService, UploadFile};
use crate::config::WizardConfig;
use crate::error::ClientError;

/// Draft field holding the subcategory picked on the general info page
pub const SUBCATEGORY_FIELD: &str = "ProductSubCategoryName";

/// Result of a saved step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub draft: ProductDraft,
    pub links: PrevNext,
    /// Route of the next page, or the fallback path when there is none
    pub next_path: String,
}

pub struct ListingWizard<S: ProductService> {
    service: S,
    category: Category,
    fallback_path: String,
}

impl<S: ProductService> ListingWizard<S> {
    pub fn new(service: S, category_id: &str, config: &WizardConfig) -> Self {
        Self {
            service,
            category: Category::resolve(category_id),
            fallback_path: config.fallback_path.clone(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn policy(&self) -> FormPolicy {
        FormPolicy::for_category(&self.category)
    }

    pub fn links(&self, step: StepName, pathname: Option<&str>) -> PrevNext {
        resolve_step_paths(&self.category, step.slug(), pathname)
    }

    /// Links of the general info page. Media categories leave it for the
    /// product-info page of the submitted subcategory.
    fn general_info_links(&self, fields: &Map<String, Value>, pathname: Option<&str>) -> PrevNext {
        let kind = self.category.kind();
        if !kind.is_media() {
            return self.links(StepName::GeneralInfo, pathname);
        }

        let subcategory = fields
            .get(SUBCATEGORY_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default();
        let initial = topology_for(kind)
            .initial()
            .map(|node| node.links)
            .unwrap_or(PrevNext::NONE);
        PrevNext {
            next: media_product_info_slug(&self.category, subcategory).or(initial.next),
            ..initial
        }
    }

    fn next_path(&self, links: &PrevNext, draft_id: &str) -> String {
        match links.next {
            Some(slug) => format!("/{}/{}", slug, draft_id),
            None => {
                tracing::warn!(
                    "No next step for category {}, using {}",
                    self.category.id(),
                    self.fallback_path
                );
                self.fallback_path.clone()
            }
        }
    }

    pub async fn subcategories(&self) -> Result<Vec<OptionItem>, ClientError> {
        match self.category.subcategory_endpoint() {
            Some(endpoint) => self.service.fetch_options(endpoint, &SUBCATEGORY_RULES).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn features(&self) -> Result<Vec<OptionItem>, ClientError> {
        match self.category.feature_endpoint() {
            Some(endpoint) => self.service.fetch_options(endpoint, &FEATURE_RULES).await,
            None => Ok(Vec::new()),
        }
    }

    /// Create the draft from the general info page
    pub async fn create_draft(
        &self,
        fields: Map<String, Value>,
        pathname: Option<&str>,
    ) -> Result<StepOutcome, ClientError> {
        validate_step_fields(StepName::GeneralInfo, &fields).map_err(ClientError::Validation)?;

        let mut payload = fields;
        payload.insert(
            "ProductCategoryName".to_string(),
            Value::String(self.category.id().to_string()),
        );
        payload.insert(
            "ProductType".to_string(),
            Value::String(self.category.product_type_label().to_string()),
        );
        let links = self.general_info_links(&payload, pathname);
        let status = status_after_step(StepName::GeneralInfo, links.next.is_some());
        payload.insert(
            "ProductUploadStatus".to_string(),
            Value::String(status.code().to_string()),
        );

        let draft = self.service.create_product(Value::Object(payload)).await?;
        let next_path = self.next_path(&links, &draft.id);
        Ok(StepOutcome {
            draft,
            links,
            next_path,
        })
    }

    /// Save one step of an existing draft
    pub async fn save_step(
        &self,
        draft_id: &str,
        step: StepName,
        fields: Map<String, Value>,
        pathname: Option<&str>,
    ) -> Result<StepOutcome, ClientError> {
        validate_step_fields(step, &fields).map_err(ClientError::Validation)?;

        let mut draft = self.service.get_product_by_id(draft_id).await?;
        let skipped = draft.merge_step(fields);
        if !skipped.is_empty() {
            tracing::debug!("Ignored reserved keys {:?} for draft {}", skipped, draft_id);
        }

        let links = self.links(step, pathname);
        draft.set_status(status_after_step(step, links.next.is_some()));

        let path = self.category.update_path(step);
        let response = self.service.update_product(path, draft.to_payload()).await?;
        let saved = ProductDraft::from_response(&response).unwrap_or(draft);

        let next_path = self.next_path(&links, &saved.id);
        Ok(StepOutcome {
            draft: saved,
            links,
            next_path,
        })
    }

    /// Check and send files for an upload step
    pub async fn upload(
        &self,
        draft_id: &str,
        kind: UploadKind,
        files: Vec<UploadFile>,
    ) -> Result<Value, ClientError> {
        kind.check_files(
            files
                .iter()
                .map(|f| (f.file_name.as_str(), f.mime_type.as_str(), f.bytes.len())),
        )
        .map_err(ClientError::Validation)?;

        let upload = files
            .into_iter()
            .fold(MultipartUpload::new(kind.field_name()).text("id", draft_id), |upload, file| {
                upload.file(file)
            });
        self.service.upload(kind.endpoint(), upload).await
    }
}
