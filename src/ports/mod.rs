//! Ports - Interfaces between the quiz core and the outside world.
//!
//! - `AIProvider` - LLM text completion
//! - `InsightService` - answers in, personality insight out
//! - `QuizFrontend` - screens out, user intents in

mod ai_provider;
mod frontend;
mod insight_service;
mod screen;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use screen::{Screen, SurveyCard};
pub use frontend::{FrontendError, QuizFrontend, UserIntent};
pub use insight_service::{InsightError, InsightService};
