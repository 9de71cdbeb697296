//! Agents — the two model wrappers behind the Coordinator.
//!
//! Each agent satisfies the one-method `Agent` contract: given an input,
//! return generated text. `reader` turns a flowchart image into pseudocode,
//! `coder` turns pseudocode (or natural language) into code. The Coordinator
//! depends only on the contract, so the underlying model is swappable.

pub mod coder;
pub mod reader;

use async_trait::async_trait;

use crate::llm::LlmError;

pub use coder::CoderAgent;
pub use reader::ReaderAgent;

/// The single-operation agent contract: run the model on one input,
/// return the generated text. No retries; callers see every failure.
#[async_trait]
pub trait Agent: Send + Sync {
    type Input;

    async fn run(&self, input: Self::Input) -> Result<String, LlmError>;
}

/// Raster image formats the Reader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Resolve a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// MIME type for the API's image block.
    pub fn media_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// An uploaded image handed to the Reader agent.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_format_from_extension() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("gif"), None);
        assert_eq!(ImageFormat::from_extension("pdf"), None);
    }

    #[test]
    fn image_format_media_types() {
        assert_eq!(ImageFormat::Png.media_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.media_type(), "image/jpeg");
    }
}
