//! Recipe and suggestion pass-throughs
//!
//! Thin wrappers over the content generator: a fixed prompt template plus an
//! output schema, with the generator's own schema enforcement doing the rest.
//! The only local rule is that the items list must not be empty.

use crate::error::{Error, GenerationError};
use crate::generator::{ContentGenerator, SchemaDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A generated recipe proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Generates recipes and companion-item suggestions from a shopping list
#[derive(Clone)]
pub struct RecipeAdvisor {
    generator: Arc<dyn ContentGenerator>,
}

impl RecipeAdvisor {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Propose a simple recipe using the listed items as ingredients
    pub async fn suggest_recipe(&self, items: &[String]) -> Result<Recipe, Error> {
        let items = required_items(items)?;

        let prompt = format!(
            "Based on these ingredients: {}, suggest a simple recipe. Provide the recipe \
             name, a short description, an ingredients list, and step-by-step instructions.",
            items.join(", ")
        );
        let schema = SchemaDescriptor::object([
            ("recipeName", SchemaDescriptor::String),
            ("description", SchemaDescriptor::String),
            ("ingredients", SchemaDescriptor::array(SchemaDescriptor::String)),
            ("instructions", SchemaDescriptor::array(SchemaDescriptor::String)),
        ]);

        let value = self.generator.generate(&prompt, &schema).await?;
        let recipe: Recipe = serde_json::from_value(value)
            .map_err(|e| GenerationError::SchemaViolation(e.to_string()))?;
        Ok(recipe)
    }

    /// Suggest three more items that go well with the current list
    pub async fn suggest_additions(&self, items: &[String]) -> Result<Vec<String>, Error> {
        let items = required_items(items)?;

        let prompt = format!(
            "Here is a shopping list: {}. Suggest 3 more items that would go well with these.",
            items.join(", ")
        );
        let schema = SchemaDescriptor::array(SchemaDescriptor::String);

        let value = self.generator.generate(&prompt, &schema).await?;
        let suggestions: Vec<String> = serde_json::from_value(value)
            .map_err(|e| GenerationError::SchemaViolation(e.to_string()))?;
        Ok(suggestions)
    }
}

/// The items list drives both prompts; an empty one is a caller error
fn required_items(items: &[String]) -> Result<&[String], Error> {
    if items.is_empty() {
        Err(Error::InvalidInput("items list is required".to_string()))
    } else {
        Ok(items)
    }
}
