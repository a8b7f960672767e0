pub mod category_kind;
pub mod upload_status;

pub use category_kind::CategoryKind;
pub use upload_status::ProductUploadStatus;
