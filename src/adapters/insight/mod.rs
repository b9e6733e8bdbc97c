//! Insight Service Adapters.
//!
//! - `LlmInsightService` - prompts an `AIProvider`
//! - `StaticInsightService` - fixed text or fixed failure

mod llm_insight_service;
mod static_insight_service;

pub use llm_insight_service::{LlmInsightService, INSIGHT_SYSTEM_PROMPT};
pub use static_insight_service::StaticInsightService;
