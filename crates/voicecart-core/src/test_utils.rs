//! Test doubles for the content generator capability

use crate::error::GenerationError;
use crate::generator::{ContentGenerator, SchemaDescriptor};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A deterministic `ContentGenerator` for tests
///
/// Returns a fixed value (or a fixed failure) on every call and records the
/// prompts and schemas it was asked for, so tests can assert on the request
/// side of the contract as well as the response side.
pub struct FakeGenerator {
    response: Option<Value>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_schema: Mutex<Option<SchemaDescriptor>>,
}

impl FakeGenerator {
    /// A generator that answers every call with `value`
    pub fn returning(value: Value) -> Self {
        Self {
            response: Some(value),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        }
    }

    /// A generator that fails every call
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        }
    }

    /// Number of generate calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt from the most recent call, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    /// The schema from the most recent call, if any
    pub fn last_schema(&self) -> Option<SchemaDescriptor> {
        self.last_schema.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Value, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_schema.lock().unwrap() = Some(schema.clone());

        match &self.response {
            Some(value) => Ok(value.clone()),
            None => Err(GenerationError::Request(
                "fake generator configured to fail".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fake_generator_records_calls() {
        let fake = FakeGenerator::returning(json!({"command": "clear"}));
        assert_eq!(fake.calls(), 0);

        let value = fake
            .generate("prompt text", &SchemaDescriptor::String)
            .await
            .unwrap();
        assert_eq!(value, json!({"command": "clear"}));
        assert_eq!(fake.calls(), 1);
        assert_eq!(fake.last_prompt().as_deref(), Some("prompt text"));
        assert_eq!(fake.last_schema(), Some(SchemaDescriptor::String));
    }

    #[tokio::test]
    async fn test_failing_fake_generator() {
        let fake = FakeGenerator::failing();
        let err = fake
            .generate("prompt text", &SchemaDescriptor::Number)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Request(_)));
        assert_eq!(fake.calls(), 1);
    }
}
