//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the quiz to external systems:
//! - `ai` - LLM providers (Gemini, Anthropic, OpenAI, mock)
//! - `insight` - insight services built on top of a provider
//! - `terminal` - interactive and scripted frontends

pub mod ai;
pub mod insight;
pub mod terminal;
