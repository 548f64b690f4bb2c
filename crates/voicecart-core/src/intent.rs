//! Intent Parser
//!
//! Maps a free-form transcript to a `Command`. Classification itself is
//! delegated to the content generator; this module owns the prompt, the
//! response schema, and the validation/normalization of whatever comes back.

use crate::command::Command;
use crate::error::Error;
use crate::generator::{ContentGenerator, SchemaDescriptor};
use std::sync::Arc;

const COMMAND_KINDS: [&str; 5] = ["add", "remove", "clear", "search", "unknown"];

/// Parses transcripts into commands via an injected content generator
#[derive(Clone)]
pub struct IntentParser {
    generator: Arc<dyn ContentGenerator>,
}

impl IntentParser {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Parse one transcript into a `Command`
    ///
    /// Empty or whitespace-only transcripts are rejected before any outbound
    /// call. Generator failures propagate unchanged; an intent the generator
    /// cannot map to a known action comes back as `Command::Unknown`.
    pub async fn parse(&self, transcript: &str) -> Result<Command, Error> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(Error::InvalidInput("transcript is required".to_string()));
        }

        let prompt = command_prompt(transcript);
        let schema = command_schema();

        let value = self.generator.generate(&prompt, &schema).await?;
        let command = Command::from_generated(&value)?;

        tracing::debug!(kind = command.kind(), "parsed transcript");
        Ok(command)
    }
}

/// Instruction given to the generator for one transcript
fn command_prompt(transcript: &str) -> String {
    format!(
        "You are a shopping list assistant. Analyze the following command: \"{transcript}\". \
         Determine the intent: is it 'add', 'remove', 'clear', 'search', or 'unknown'?\n\
         - For 'add', extract the item and quantity (default 1).\n\
         - For 'remove', extract the item.\n\
         - For 'clear', no item is needed.\n\
         - For 'search', extract the main item, any descriptive tags (like 'organic'), \
         a brand, and a max price if mentioned (e.g., 'under $5')."
    )
}

/// Response schema constraining the generator to the command contract
fn command_schema() -> SchemaDescriptor {
    SchemaDescriptor::object([
        ("command", SchemaDescriptor::enumeration(COMMAND_KINDS)),
        ("item", SchemaDescriptor::String),
        ("quantity", SchemaDescriptor::Number),
        ("tags", SchemaDescriptor::array(SchemaDescriptor::String)),
        ("brand", SchemaDescriptor::String),
        ("maxPrice", SchemaDescriptor::Number),
    ])
}
