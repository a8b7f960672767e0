pub mod normalize;
pub mod pricing;
pub mod validation;
