//! Flowcode — flowchart-to-code assistant.
//!
//! A two-stage pipeline behind a web form: the Reader agent transcribes a
//! flowchart image into pseudocode, the Coder agent turns pseudocode into
//! code. The Coordinator routes each submission to one of the two.
//!
//! ## Architecture
//!
//! - `llm`: Anthropic Messages API client and wire types
//! - `prompts`: versioned system prompts loaded from disk
//! - `agent`: the `Agent` contract plus the Reader and Coder wrappers
//! - `coordinator`: image-vs-text dispatch
//! - `fence`: splits model output around its fenced code block
//! - `web`: axum form, per-session state, HTML rendering
//! - `config`: YAML configuration with full defaults

pub mod agent;
pub mod config;
pub mod coordinator;
pub mod fence;
pub mod llm;
pub mod prompts;
pub mod web;
