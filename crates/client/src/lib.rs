//! Async client for the product service behind the listing wizard
//!
//! [`api::ProductServiceClient`] talks HTTP; [`wizard::ListingWizard`]
//! sequences the draft calls of each step using the configuration in the
//! `contracts` crate.

pub mod api;
pub mod config;
pub mod error;
pub mod wizard;

pub use api::{MultipartUpload, ProductService, ProductServiceClient, UploadFile};
pub use config::{load_config, Config};
pub use error::ClientError;
pub use wizard::{ListingWizard, StepOutcome};
