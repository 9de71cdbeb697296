//! Coder agent — pseudocode (or natural language) to code.
//!
//! Same shape as the Reader but text-only: fixed system prompt, one user
//! message, bounded generation, decoded text back.

use async_trait::async_trait;
use tracing::debug;

use crate::llm::types::Message;
use crate::llm::{LlmClient, LlmError, MessagesRequest};

use super::Agent;

/// Coder agent for generating code from pseudocode.
pub struct CoderAgent {
    llm: LlmClient,
    model: String,
    system_prompt: String,
    max_tokens: u32,
}

impl CoderAgent {
    pub fn new(llm: LlmClient, model: String, system_prompt: String, max_tokens: u32) -> Self {
        Self {
            llm,
            model,
            system_prompt,
            max_tokens,
        }
    }

    fn build_request(&self, prompt: &str) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user_text(prompt)],
            system: Some(self.system_prompt.clone()),
            temperature: None,
        }
    }
}

#[async_trait]
impl Agent for CoderAgent {
    type Input = String;

    async fn run(&self, prompt: String) -> Result<String, LlmError> {
        debug!(model = %self.model, chars = prompt.len(), "coder: sending prompt");
        self.llm.complete(&self.build_request(&prompt)).await
    }
}
