pub mod category;
pub mod draft;
pub mod field_policy;
pub mod steps;
pub mod upload;
