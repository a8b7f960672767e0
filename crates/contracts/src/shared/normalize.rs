//! Option lists from loosely shaped service responses
//!
//! Subcategory and feature endpoints come from several backends and disagree
//! on field names. Each extraction rule is a prioritized key list; the first
//! key holding a usable value wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRules {
    /// Keys that may hold the list itself
    pub collection_keys: &'static [&'static str],
    pub id_keys: &'static [&'static str],
    pub label_keys: &'static [&'static str],
}

pub const SUBCATEGORY_RULES: ExtractionRules = ExtractionRules {
    collection_keys: &["data", "body", "subcategories", "SubCategory", "result", "items"],
    id_keys: &["_id", "id", "SubcategoryId", "subcategoryId"],
    label_keys: &[
        "SubcategoryType",
        "SubCategoryType",
        "subcategoryType",
        "SubcategoryName",
        "SubCategoryName",
        "subcategoryName",
        "MediaType",
        "Mediacategory",
        "CompanyTypeName",
        "name",
        "Name",
        "title",
    ],
};

pub const FEATURE_RULES: ExtractionRules = ExtractionRules {
    collection_keys: &["data", "body", "features", "result", "items"],
    id_keys: &["_id", "id", "FeatureId"],
    label_keys: &[
        "SampleFeature",
        "Feature",
        "FeatureName",
        "featureName",
        "name",
        "Name",
        "title",
    ],
};

/// Maximum envelope depth searched for the list
const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: Option<String>,
    pub label: String,
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(object: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(scalar_text)
}

fn find_collection<'v>(
    value: &'v Value,
    rules: &ExtractionRules,
    depth: usize,
) -> Option<&'v Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(object) if depth < MAX_DEPTH => rules
            .collection_keys
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(|inner| find_collection(inner, rules, depth + 1)),
        _ => None,
    }
}

fn extract_item(item: &Value, rules: &ExtractionRules) -> Option<OptionItem> {
    match item {
        Value::Object(object) => Some(OptionItem {
            id: first_text(object, rules.id_keys),
            label: first_text(object, rules.label_keys)?,
        }),
        other => scalar_text(other).map(|label| OptionItem { id: None, label }),
    }
}

/// Option items found in `payload`.
///
/// `None` means no list or no item with a recognizable label was found.
/// Items are deduplicated by label, keeping the first occurrence.
pub fn extract_options(payload: &Value, rules: &ExtractionRules) -> Option<Vec<OptionItem>> {
    let items = find_collection(payload, rules, 0)?;

    let mut options: Vec<OptionItem> = Vec::new();
    for option in items.iter().filter_map(|item| extract_item(item, rules)) {
        if !options.iter().any(|o| o.label == option.label) {
            options.push(option);
        }
    }

    if options.is_empty() && !items.is_empty() {
        return None;
    }
    Some(options)
}
