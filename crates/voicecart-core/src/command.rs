//! Command model
//!
//! The closed set of intents a transcript can resolve to. The variant is
//! chosen by the external generator; this module only validates and
//! normalizes the generator's JSON into the enum, so callers always see one
//! of exactly five shapes no matter what the model produced.

use crate::catalog::SearchCriteria;
use crate::error::GenerationError;
use serde_json::Value;

/// A recognized user intent
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an item to the list
    Add { item: String, quantity: u32 },
    /// Remove an item from the list
    Remove { item: String },
    /// Clear the whole list
    Clear,
    /// Search the product catalog
    Search(SearchCriteria),
    /// The generator could not map the transcript to a known action
    Unknown,
}

impl Command {
    /// Wire name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
            Command::Clear => "clear",
            Command::Search(_) => "search",
            Command::Unknown => "unknown",
        }
    }

    /// Build a `Command` from the generator's classification output
    ///
    /// The payload must be a JSON object (anything else violates the command
    /// schema). Within the object, an unrecognized or missing `command` kind
    /// degrades to `Unknown`, as does an add/remove without a usable item.
    /// Out-of-range quantities fall back to the default of 1.
    pub fn from_generated(value: &Value) -> Result<Command, GenerationError> {
        let fields = value.as_object().ok_or_else(|| {
            GenerationError::SchemaViolation(format!(
                "expected a command object, got {}",
                json_type_name(value)
            ))
        })?;

        let kind = fields.get("command").and_then(Value::as_str).unwrap_or("");

        let command = match kind {
            "add" => match normalized_string(fields.get("item")) {
                Some(item) => Command::Add {
                    item,
                    quantity: quantity_or_default(fields.get("quantity")),
                },
                None => Command::Unknown,
            },
            "remove" => match normalized_string(fields.get("item")) {
                Some(item) => Command::Remove { item },
                None => Command::Unknown,
            },
            "clear" => Command::Clear,
            "search" => Command::Search(criteria_from_fields(fields)),
            _ => Command::Unknown,
        };

        Ok(command)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Trim + lowercase a generated string field; empty results count as absent
fn normalized_string(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim().to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Quantities must be integers >= 1; anything else means the default applies
fn quantity_or_default(value: Option<&Value>) -> u32 {
    match value.and_then(Value::as_f64) {
        Some(n) if n >= 1.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => n as u32,
        _ => 1,
    }
}

fn criteria_from_fields(fields: &serde_json::Map<String, Value>) -> SearchCriteria {
    let mut criteria = SearchCriteria::new();

    if let Some(item) = normalized_string(fields.get("item")) {
        criteria = criteria.with_item(item);
    }
    if let Some(brand) = normalized_string(fields.get("brand")) {
        criteria = criteria.with_brand(brand);
    }
    if let Some(max_price) = fields.get("maxPrice").and_then(Value::as_f64) {
        criteria = criteria.with_max_price(max_price);
    }
    if let Some(tags) = fields.get("tags").and_then(Value::as_array) {
        // Non-string entries are dropped rather than failing the parse
        let tags = tags.iter().filter_map(Value::as_str);
        criteria = criteria.with_tags(tags);
    }

    criteria
}
