//! Configuration — models, prompt versions, listen address.
//!
//! Loaded from a YAML file when present; every field has a default so the
//! binary runs with no config at all. Model names may be aliases resolved
//! through `llm::resolve_model`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Model and prompt selection for one agent.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub model: String,
    pub prompt_version: String,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the web form listens on.
    pub listen_addr: String,
    /// Root directory for versioned prompt files.
    pub prompts_dir: PathBuf,
    /// Generation bound for both agents.
    pub max_tokens: u32,
    pub reader: AgentConfig,
    pub coder: AgentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".into(),
            prompts_dir: "prompts".into(),
            max_tokens: 1024,
            reader: AgentConfig {
                model: "sonnet".into(),
                prompt_version: "v1-en".into(),
            },
            coder: AgentConfig {
                model: "haiku".into(),
                prompt_version: "v1-en".into(),
            },
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
