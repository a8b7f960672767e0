pub mod aggregate;

pub use aggregate::{status_after_step, ProductDraft};
