//! Reader agent — flowchart image to pseudocode.
//!
//! Wraps a vision-capable model. The conversation is the fixed system
//! prompt plus one user message whose content is the image as a base64
//! block; the model's text completion is the pseudocode.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::debug;

use crate::llm::types::Message;
use crate::llm::{LlmClient, LlmError, MessagesRequest};

use super::{Agent, ImageInput};

/// Reader agent for generating pseudocode from a flowchart image.
pub struct ReaderAgent {
    llm: LlmClient,
    model: String,
    system_prompt: String,
    max_tokens: u32,
}

impl ReaderAgent {
    pub fn new(llm: LlmClient, model: String, system_prompt: String, max_tokens: u32) -> Self {
        Self {
            llm,
            model,
            system_prompt,
            max_tokens,
        }
    }

    fn build_request(&self, image: &ImageInput) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user_image(
                image.format.media_type(),
                BASE64.encode(&image.bytes),
            )],
            system: Some(self.system_prompt.clone()),
            temperature: None,
        }
    }
}

#[async_trait]
impl Agent for ReaderAgent {
    type Input = ImageInput;

    async fn run(&self, image: ImageInput) -> Result<String, LlmError> {
        debug!(model = %self.model, bytes = image.bytes.len(), "reader: sending image");
        self.llm.complete(&self.build_request(&image)).await
    }
}
