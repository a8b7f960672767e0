//! Validation rules for wizard form fields

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::steps::StepName;
use crate::shared::pricing::validate_gst_rate;

/// Compiled `ValidationRules::pattern` values, keyed by the pattern text
static PATTERNS: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn compiled(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }
    let regex = Regex::new(pattern)?;
    cache.insert(pattern, regex.clone());
    Ok(regex)
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} cannot be empty", field_label));
            }
            return Ok(());
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            let regex = compiled(pattern)
                .map_err(|e| format!("Invalid pattern for {}: {}", field_label, e))?;
            if !regex.is_match(trimmed) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }

        Ok(())
    }
}

pub const PRODUCT_NAME: ValidationRules = ValidationRules {
    min_length: Some(3),
    max_length: Some(100),
    ..ValidationRules::required()
};

pub const HSN_CODE: ValidationRules = ValidationRules {
    pattern: Some(r"^(\d{4}|\d{6}|\d{8})$"),
    custom_error: Some("HSN code must have 4, 6 or 8 digits"),
    ..ValidationRules::required()
};

pub const PRICE: ValidationRules = ValidationRules {
    min: Some(1.0),
    ..ValidationRules::required()
};

pub const ORDER_QUANTITY: ValidationRules = ValidationRules {
    min: Some(1.0),
    ..ValidationRules::required()
};

/// Selling price may not exceed the listed price
pub fn validate_discounted_price(price: f64, discounted_price: f64) -> Result<(), String> {
    PRICE.validate_number(price, "Price")?;
    PRICE.validate_number(discounted_price, "Discounted price")?;
    if discounted_price > price {
        return Err("Discounted price cannot be greater than price".to_string());
    }
    Ok(())
}

pub fn validate_order_quantity(min: f64, max: f64) -> Result<(), String> {
    ORDER_QUANTITY.validate_number(min, "Minimum order quantity")?;
    ORDER_QUANTITY.validate_number(max, "Maximum order quantity")?;
    if min > max {
        return Err("Minimum order quantity cannot exceed maximum order quantity".to_string());
    }
    Ok(())
}

/// Finite number from a JSON value; form inputs often post numbers as strings
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// `None` when the field is absent, null or blank; an error when it holds
/// something that is not a finite number
fn numeric_field(
    fields: &Map<String, Value>,
    key: &str,
    field_label: &str,
) -> Result<Option<f64>, String> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => number(value)
            .map(Some)
            .ok_or_else(|| format!("{} must be a number", field_label)),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn validate_pricing(fields: &Map<String, Value>) -> Result<(), String> {
    let price = numeric_field(fields, "PricePerUnit", "Price")?;
    let discounted = numeric_field(fields, "DiscountedPrice", "Discounted price")?;
    if let (Some(price), Some(discounted)) = (price, discounted) {
        validate_discounted_price(price, discounted)?;
    }

    let min = numeric_field(fields, "MinOrderQuantity", "Minimum order quantity")?;
    let max = numeric_field(fields, "MaxOrderQuantity", "Maximum order quantity")?;
    if let (Some(min), Some(max)) = (min, max) {
        validate_order_quantity(min, max)?;
    }

    if let Some(gst) = numeric_field(fields, "GST", "GST")? {
        validate_gst_rate(gst)?;
    }
    Ok(())
}

/// Client-side checks a step runs before its fields are saved
pub fn validate_step_fields(step: StepName, fields: &Map<String, Value>) -> Result<(), String> {
    match step {
        StepName::GeneralInfo => {
            let name = fields.get("ProductName").and_then(text).unwrap_or_default();
            PRODUCT_NAME.validate_string(&name, "Product name")
        }
        StepName::ProductInfo => {
            if let Some(hsn) = fields.get("HSN") {
                HSN_CODE.validate_string(&text(hsn).unwrap_or_default(), "HSN code")?;
            }
            validate_pricing(fields)?;
            if let Some(Value::Array(variants)) = fields.get("ProductsVariantions") {
                if variants.is_empty() {
                    return Err("Add at least one product variant".to_string());
                }
                for (i, variant) in variants.iter().enumerate() {
                    let variant = variant
                        .as_object()
                        .ok_or_else(|| format!("Variant {} is malformed", i + 1))?;
                    validate_pricing(variant).map_err(|e| format!("Variant {}: {}", i + 1, e))?;
                }
            }
            Ok(())
        }
        StepName::TechInfo | StepName::GoLive | StepName::VoucherDesign => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_required_string() {
        assert!(ValidationRules::required().validate_string("  ", "Name").is_err());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
        assert!(PRODUCT_NAME.validate_string("TV", "Name").is_err());
    }

    #[test]
    fn test_hsn_pattern() {
        for ok in ["6109", "610910", "61091000"] {
            assert!(HSN_CODE.validate_string(ok, "HSN").is_ok(), "{}", ok);
        }
        for bad in ["610", "61091", "abcd", "6109100000"] {
            assert_eq!(
                HSN_CODE.validate_string(bad, "HSN"),
                Err("HSN code must have 4, 6 or 8 digits".to_string()),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let rules = ValidationRules {
            pattern: Some("("),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("x", "Field").is_err());
    }

    #[test]
    fn test_discounted_price() {
        assert!(validate_discounted_price(1000.0, 900.0).is_ok());
        assert!(validate_discounted_price(1000.0, 1000.0).is_ok());
        assert!(validate_discounted_price(1000.0, 1200.0).is_err());
        assert!(validate_discounted_price(0.0, 0.0).is_err());
    }

    #[test]
    fn test_order_quantity() {
        assert!(validate_order_quantity(1.0, 10.0).is_ok());
        assert!(validate_order_quantity(10.0, 1.0).is_err());
        assert!(validate_order_quantity(0.0, 1.0).is_err());
    }

    #[test]
    fn test_number_accepts_strings() {
        assert_eq!(number(&json!("12.5")), Some(12.5));
        assert_eq!(number(&json!(3)), Some(3.0));
        assert_eq!(number(&json!("abc")), None);
        assert_eq!(number(&json!(null)), None);
        assert_eq!(number(&json!("NaN")), None);
        assert_eq!(number(&json!("inf")), None);
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        assert!(PRICE.validate_number(f64::NAN, "Price").is_err());
        assert!(PRICE.validate_number(f64::INFINITY, "Price").is_err());
        assert!(validate_discounted_price(f64::NAN, f64::NAN).is_err());
        assert!(validate_order_quantity(1.0, f64::INFINITY).is_err());

        let variants = fields(json!({
            "ProductsVariantions": [{
                "PricePerUnit": "NaN",
                "DiscountedPrice": "NaN",
                "MinOrderQuantity": "NaN",
                "MaxOrderQuantity": "inf"
            }]
        }));
        assert_eq!(
            validate_step_fields(StepName::ProductInfo, &variants),
            Err("Variant 1: Price must be a number".to_string())
        );

        let quantities = fields(json!({"MinOrderQuantity": 1, "MaxOrderQuantity": "inf"}));
        assert_eq!(
            validate_step_fields(StepName::ProductInfo, &quantities),
            Err("Maximum order quantity must be a number".to_string())
        );
    }

    #[test]
    fn test_blank_numeric_fields_skipped() {
        let blank = fields(json!({"PricePerUnit": "", "DiscountedPrice": null, "GST": " "}));
        assert!(validate_step_fields(StepName::ProductInfo, &blank).is_ok());
    }

    #[test]
    fn test_pattern_compiled_once() {
        assert!(HSN_CODE.validate_string("6109", "HSN").is_ok());
        assert!(HSN_CODE.validate_string("610910", "HSN").is_ok());
        let cache = PATTERNS.lock().unwrap();
        assert!(cache.contains_key(r"^(\d{4}|\d{6}|\d{8})$"));
    }

    #[test]
    fn test_general_info_needs_name() {
        assert!(validate_step_fields(StepName::GeneralInfo, &fields(json!({}))).is_err());
        assert!(validate_step_fields(
            StepName::GeneralInfo,
            &fields(json!({"ProductName": "Cotton shirt"}))
        )
        .is_ok());
    }

    #[test]
    fn test_product_info_checks_variants() {
        let ok = fields(json!({
            "HSN": "6109",
            "GST": "12",
            "ProductsVariantions": [
                {
                    "PricePerUnit": "1000",
                    "DiscountedPrice": 800,
                    "MinOrderQuantity": 1,
                    "MaxOrderQuantity": 50
                }
            ]
        }));
        assert!(validate_step_fields(StepName::ProductInfo, &ok).is_ok());

        let bad = fields(json!({
            "ProductsVariantions": [
                {"PricePerUnit": 1000, "DiscountedPrice": 800},
                {"PricePerUnit": 500, "DiscountedPrice": 700}
            ]
        }));
        assert_eq!(
            validate_step_fields(StepName::ProductInfo, &bad),
            Err("Variant 2: Discounted price cannot be greater than price".to_string())
        );
    }

    #[test]
    fn test_product_info_rejects_bad_gst_and_hsn() {
        assert!(validate_step_fields(StepName::ProductInfo, &fields(json!({"GST": 7}))).is_err());
        assert!(validate_step_fields(StepName::ProductInfo, &fields(json!({"HSN": 12}))).is_err());
        let no_variants = fields(json!({"ProductsVariantions": []}));
        assert!(validate_step_fields(StepName::ProductInfo, &no_variants).is_err());
    }

    #[test]
    fn test_other_steps_pass() {
        assert!(validate_step_fields(StepName::GoLive, &fields(json!({}))).is_ok());
    }
}
