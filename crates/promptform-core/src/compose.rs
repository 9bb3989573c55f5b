//! Narrative composer: pure functions that format the current field values
//! into the prompt text blocks. Missing values degrade to empty strings,
//! never an error.

use std::collections::HashMap;

use crate::catalog::{FieldDescriptor, FieldGroups};

fn lines(fields: &[FieldDescriptor], values: &HashMap<String, String>) -> String {
    fields
        .iter()
        .map(|f| {
            let value = values.get(f.key).map(String::as_str).unwrap_or("");
            format!("{}: {}", f.label, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full assumption overview (prompt key "partA"): product id plus every
/// group as `label: value` lines under its section heading.
pub fn overview(product: &str, groups: &FieldGroups, values: &HashMap<String, String>) -> String {
    format!(
        "These are the assumptions:\nProduct: {}\n\nProduct Information:\n{}\n\nFunding Options:\n{}\n\nC assumptions:\n{}",
        product,
        lines(groups.product_info, values),
        lines(groups.funding_options, values),
        lines(groups.funding_situation, values),
    )
}

/// Funding options block (prompt key "partB").
pub fn funding_options(groups: &FieldGroups, values: &HashMap<String, String>) -> String {
    format!(
        "These are the Funding Options:\n{}",
        lines(groups.funding_options, values)
    )
}

/// Funding situation block (prompt key "partC").
pub fn funding_situation(groups: &FieldGroups, values: &HashMap<String, String>) -> String {
    format!(
        "These are the C info assumptions:\n{}",
        lines(groups.funding_situation, values)
    )
}
