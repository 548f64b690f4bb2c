//! Request and response shapes for the REST API
//!
//! Field names here are the wire contract shared with the browser front end;
//! camelCase fields (`maxPrice`) stay camelCase.

use serde::{Deserialize, Serialize};
use voicecart_core::{Command, SearchCriteria};

/// Request body for `POST /api/command`
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub transcript: String,
}

/// Flat command shape returned to the caller
///
/// Exactly one variant's fields are populated; absent fields are omitted
/// from the JSON entirely.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl From<Command> for CommandResponse {
    fn from(command: Command) -> Self {
        let kind = command.kind();
        let mut response = Self {
            command: kind,
            item: None,
            quantity: None,
            tags: None,
            brand: None,
            max_price: None,
        };

        match command {
            Command::Add { item, quantity } => {
                response.item = Some(item);
                response.quantity = Some(quantity);
            }
            Command::Remove { item } => {
                response.item = Some(item);
            }
            Command::Search(criteria) => {
                response.item = criteria.item().map(str::to_string);
                response.brand = criteria.brand().map(str::to_string);
                response.max_price = criteria.max_price();
                if !criteria.tags().is_empty() {
                    response.tags = Some(criteria.tags().to_vec());
                }
            }
            Command::Clear | Command::Unknown => {}
        }

        response
    }
}

/// Request body for `POST /api/recipe` and `POST /api/suggestions`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsRequest {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Request body for `POST /api/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub item: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub brand: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

impl SearchRequest {
    /// Fold the raw request into normalized criteria
    pub fn into_criteria(self) -> SearchCriteria {
        let mut criteria = SearchCriteria::new().with_tags(self.tags);
        if let Some(item) = self.item {
            criteria = criteria.with_item(item);
        }
        if let Some(brand) = self.brand {
            criteria = criteria.with_brand(brand);
        }
        if let Some(max_price) = self.max_price {
            criteria = criteria.with_max_price(max_price);
        }
        criteria
    }
}

/// Error payload returned on any failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Response for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_command_response_shape() {
        let response = CommandResponse::from(Command::Add {
            item: "milk".to_string(),
            quantity: 2,
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"command": "add", "item": "milk", "quantity": 2}));
    }

    #[test]
    fn test_unknown_command_response_has_no_payload() {
        let value = serde_json::to_value(CommandResponse::from(Command::Unknown)).unwrap();
        assert_eq!(value, json!({"command": "unknown"}));
    }

    #[test]
    fn test_search_command_response_uses_max_price_wire_name() {
        let criteria = SearchCriteria::new()
            .with_item("toothpaste")
            .with_max_price(3.0)
            .with_tags(["personal-care"]);
        let value = serde_json::to_value(CommandResponse::from(Command::Search(criteria))).unwrap();
        assert_eq!(
            value,
            json!({
                "command": "search",
                "item": "toothpaste",
                "tags": ["personal-care"],
                "maxPrice": 3.0
            })
        );
    }

    #[test]
    fn test_search_request_normalizes_into_criteria() {
        let request: SearchRequest = serde_json::from_value(json!({
            "item": " Milk ",
            "brand": "DairyLand",
            "maxPrice": 4.0,
            "tags": ["Dairy"]
        }))
        .unwrap();

        let criteria = request.into_criteria();
        assert_eq!(criteria.item(), Some("milk"));
        assert_eq!(criteria.brand(), Some("dairyland"));
        assert_eq!(criteria.max_price(), Some(4.0));
        assert_eq!(criteria.tags(), ["dairy"]);
    }

    #[test]
    fn test_search_request_with_no_fields() {
        let request: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.into_criteria().is_empty());
    }

    #[test]
    fn test_command_request_missing_transcript_defaults_to_empty() {
        let request: CommandRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.transcript.is_empty());
    }
}
