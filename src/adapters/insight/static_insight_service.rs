//! Insight service with a fixed outcome.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::quiz::{Answer, Demographics};
use crate::ports::{InsightError, InsightService};

/// Always returns the same insight, or always fails.
#[derive(Debug)]
pub struct StaticInsightService {
    outcome: Result<String, InsightError>,
    calls: AtomicUsize,
}

impl StaticInsightService {
    pub fn succeeding(insight: impl Into<String>) -> Self {
        Self {
            outcome: Ok(insight.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(InsightError::service_failure(reason)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InsightService for StaticInsightService {
    async fn generate_insight(
        &self,
        _answers: &[Answer],
        _survey_title: &str,
        _demographics: Option<&Demographics>,
    ) -> Result<String, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_outcome() {
        let ok = StaticInsightService::succeeding("You are curious.");
        assert_eq!(
            ok.generate_insight(&[], "Core Personality", None).await,
            Ok("You are curious.".to_string())
        );
        assert_eq!(ok.call_count(), 1);

        let failing = StaticInsightService::failing("timeout");
        assert_eq!(
            failing.generate_insight(&[], "Core Personality", None).await,
            Err(InsightError::service_failure("timeout"))
        );
    }
}
