//! Prompt Loader — versioned system prompts from disk.
//!
//! Prompts live at `<root>/<agent>/<version>.txt` and are loaded once at
//! startup. Agent names are checked against a fixed allow-list so a typo in
//! the config fails fast instead of producing an empty system prompt.

use std::path::PathBuf;

/// Agents that have prompt directories.
pub const AVAILABLE_AGENTS: &[&str] = &["coder", "flowchart_reader"];

/// Errors from prompt loading. Both are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("unknown agent: '{0}'")]
    UnknownAgent(String),

    #[error("prompt file '{version}' not found for agent '{agent}'")]
    MissingVersion { agent: String, version: String },

    #[error("failed to read prompt for agent '{agent}': {source}")]
    Io {
        agent: String,
        #[source]
        source: std::io::Error,
    },
}

/// Loads system prompts for a named agent/version pair.
#[derive(Debug, Clone)]
pub struct PromptLoader {
    root: PathBuf,
}

impl PromptLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the prompt for `agent_name` at `version`.
    ///
    /// Returns the full file contents. Fails with `UnknownAgent` for names
    /// outside the allow-list and `MissingVersion` when the version file
    /// does not exist.
    pub fn load(&self, agent_name: &str, version: &str) -> Result<String, PromptError> {
        if !AVAILABLE_AGENTS.contains(&agent_name) {
            return Err(PromptError::UnknownAgent(agent_name.to_string()));
        }

        let path = self.root.join(agent_name).join(format!("{version}.txt"));
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PromptError::MissingVersion {
                    agent: agent_name.to_string(),
                    version: version.to_string(),
                })
            }
            Err(e) => Err(PromptError::Io {
                agent: agent_name.to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for agent in AVAILABLE_AGENTS {
            std::fs::create_dir_all(dir.path().join(agent)).unwrap();
            std::fs::write(
                dir.path().join(agent).join("v1-en.txt"),
                format!("system prompt for {agent}"),
            )
            .unwrap();
        }
        dir
    }

    #[test]
    fn loads_existing_prompts() {
        let dir = fixture_root();
        let loader = PromptLoader::new(dir.path());
        for agent in AVAILABLE_AGENTS {
            let text = loader.load(agent, "v1-en").unwrap();
            assert!(!text.is_empty());
            assert!(text.contains(agent));
        }
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let dir = fixture_root();
        let loader = PromptLoader::new(dir.path());
        let err = loader.load("planner", "v1-en").unwrap_err();
        assert!(matches!(err, PromptError::UnknownAgent(ref name) if name == "planner"));
    }

    #[test]
    fn missing_version_is_reported() {
        let dir = fixture_root();
        let loader = PromptLoader::new(dir.path());
        let err = loader.load("coder", "v9-xx").unwrap_err();
        match err {
            PromptError::MissingVersion { agent, version } => {
                assert_eq!(agent, "coder");
                assert_eq!(version, "v9-xx");
            }
            other => panic!("expected MissingVersion, got {other:?}"),
        }
    }
}
