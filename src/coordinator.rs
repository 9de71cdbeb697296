//! Coordinator — routes each request to the Reader or the Coder.
//!
//! One instance of each agent lives for the whole process (model clients
//! are cheap, but prompt loading and construction happen once). The branch
//! is the only logic here: image input goes to the Reader, text input goes
//! to the Coder, neither yields no result. No caching, no retries.

use tracing::info;

use crate::agent::{Agent, CoderAgent, ImageInput, ReaderAgent};
use crate::config::Config;
use crate::llm::{resolve_model, LlmClient, LlmError};
use crate::prompts::{PromptError, PromptLoader};

/// What the Coordinator produced for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// Reader output: pseudocode transcribed from a flowchart image.
    Pseudocode(String),
    /// Coder output: code generated from pseudocode.
    Code(String),
}

/// Startup failures while wiring the agents. All fatal.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Coordinates the execution of agents based on user input.
pub struct Coordinator {
    reader: Box<dyn Agent<Input = ImageInput>>,
    coder: Box<dyn Agent<Input = String>>,
}

impl Coordinator {
    /// Build both agents from config: load their system prompts, read the
    /// API key from the environment, resolve model aliases.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let prompts = PromptLoader::new(&config.prompts_dir);
        let reader_prompt = prompts.load("flowchart_reader", &config.reader.prompt_version)?;
        let coder_prompt = prompts.load("coder", &config.coder.prompt_version)?;

        let llm = LlmClient::from_env()?;

        info!(model = resolve_model(&config.reader.model), "initializing Reader agent");
        let reader = ReaderAgent::new(
            llm.clone(),
            resolve_model(&config.reader.model).to_string(),
            reader_prompt,
            config.max_tokens,
        );

        info!(model = resolve_model(&config.coder.model), "initializing Coder agent");
        let coder = CoderAgent::new(
            llm,
            resolve_model(&config.coder.model).to_string(),
            coder_prompt,
            config.max_tokens,
        );

        Ok(Self::with_agents(Box::new(reader), Box::new(coder)))
    }

    /// Wire the Coordinator with explicit agents (tests inject stubs here).
    pub fn with_agents(
        reader: Box<dyn Agent<Input = ImageInput>>,
        coder: Box<dyn Agent<Input = String>>,
    ) -> Self {
        Self { reader, coder }
    }

    /// Handle one submission: an image goes to the Reader, non-blank text
    /// goes to the Coder, neither produces no result. The caller validates
    /// that at least one input is present.
    pub async fn handle_input(
        &self,
        image: Option<ImageInput>,
        text: &str,
    ) -> Result<Option<AgentReply>, LlmError> {
        if let Some(image) = image {
            info!("detected image input, calling Reader agent");
            let pseudocode = self.reader.run(image).await?;
            return Ok(Some(AgentReply::Pseudocode(pseudocode)));
        }

        if !text.trim().is_empty() {
            info!("detected pseudocode input, calling Coder agent");
            let code = self.coder.run(text.to_string()).await?;
            return Ok(Some(AgentReply::Code(code)));
        }

        Ok(None)
    }

    /// Regenerate code from the currently displayed (possibly user-edited)
    /// pseudocode, consumed verbatim.
    pub async fn generate_code(&self, pseudocode: &str) -> Result<String, LlmError> {
        info!("calling Coder agent");
        self.coder.run(pseudocode.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::agent::ImageFormat;

    struct StubReader {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Agent for StubReader {
        type Input = ImageInput;

        async fn run(&self, _input: ImageInput) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("BEGIN\n  PRINT hello\nEND".into())
        }
    }

    struct StubCoder {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Agent for StubCoder {
        type Input = String;

        async fn run(&self, input: String) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("# generated from: {}", input.lines().count()))
        }
    }

    fn coordinator() -> (Coordinator, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let reader_calls = Arc::new(AtomicUsize::new(0));
        let coder_calls = Arc::new(AtomicUsize::new(0));
        let coordinator = Coordinator::with_agents(
            Box::new(StubReader {
                calls: reader_calls.clone(),
            }),
            Box::new(StubCoder {
                calls: coder_calls.clone(),
            }),
        );
        (coordinator, reader_calls, coder_calls)
    }

    fn png() -> ImageInput {
        ImageInput::new(ImageFormat::Png, vec![1, 2, 3])
    }

    #[tokio::test]
    async fn image_input_invokes_only_the_reader() {
        let (c, reader_calls, coder_calls) = coordinator();
        let reply = c.handle_input(Some(png()), "").await.unwrap();
        assert!(matches!(reply, Some(AgentReply::Pseudocode(_))));
        assert_eq!(reader_calls.load(Ordering::SeqCst), 1);
        assert_eq!(coder_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn image_wins_over_text_when_both_present() {
        let (c, reader_calls, coder_calls) = coordinator();
        let reply = c.handle_input(Some(png()), "some text").await.unwrap();
        assert!(matches!(reply, Some(AgentReply::Pseudocode(_))));
        assert_eq!(reader_calls.load(Ordering::SeqCst), 1);
        assert_eq!(coder_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn text_input_invokes_only_the_coder() {
        let (c, reader_calls, coder_calls) = coordinator();
        let reply = c.handle_input(None, "some text").await.unwrap();
        assert!(matches!(reply, Some(AgentReply::Code(_))));
        assert_eq!(reader_calls.load(Ordering::SeqCst), 0);
        assert_eq!(coder_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_text_invokes_nothing() {
        let (c, reader_calls, coder_calls) = coordinator();
        let reply = c.handle_input(None, "   \n  ").await.unwrap();
        assert!(reply.is_none());
        assert_eq!(reader_calls.load(Ordering::SeqCst), 0);
        assert_eq!(coder_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generate_code_is_deterministic_for_a_deterministic_agent() {
        let (c, _, coder_calls) = coordinator();
        let first = c.generate_code("READ x\nPRINT x").await.unwrap();
        let second = c.generate_code("READ x\nPRINT x").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(coder_calls.load(Ordering::SeqCst), 2);
    }
}
