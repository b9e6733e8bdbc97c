use anyhow::Context;
use std::sync::Arc;

use insight_quiz::adapters::ai::build_provider;
use insight_quiz::adapters::insight::LlmInsightService;
use insight_quiz::adapters::terminal::DialoguerFrontend;
use insight_quiz::application::{QuizController, QuizRunner};
use insight_quiz::config::AppConfig;
use insight_quiz::domain::catalog::SurveyCatalog;
use insight_quiz::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    telemetry::init(&config.logging).context("failed to initialise logging")?;

    let catalog = match config.catalog.path() {
        Some(path) => SurveyCatalog::load(path)
            .with_context(|| format!("failed to load survey catalog from {}", path.display()))?,
        None => SurveyCatalog::builtin(),
    };

    let provider = build_provider(&config.ai).context("failed to set up AI provider")?;
    let insight_service = LlmInsightService::new(provider)
        .with_max_tokens(config.ai.max_tokens)
        .with_temperature(config.ai.temperature);

    let controller = QuizController::new(Arc::new(catalog), Arc::new(insight_service));
    let mut runner = QuizRunner::new(controller, DialoguerFrontend::new());

    runner.run().await?;
    Ok(())
}
