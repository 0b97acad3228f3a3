use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use review_sentiment::ai::OpenAiProvider;
use review_sentiment::analysis::{FixedDelay, SentimentClassifier, SentimentPipeline};
use review_sentiment::cli::args::Args;
use review_sentiment::config::Config;
use review_sentiment::infrastructure::logging;
use review_sentiment::storage::{self, ReviewRepository, SentimentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::new();
    config.update_from_args(&args);

    logging::setup_logging("info")?;

    let pool = storage::connect(&config.db_path).await?;
    let repository = ReviewRepository::new(pool.clone()).await?;
    let store = SentimentStore::new(pool.clone()).await?;

    let reviews = repository.get_unprocessed(config.batch_limit).await?;
    if reviews.is_empty() {
        info!("no unprocessed reviews found");
        return Ok(());
    }
    info!("fetched {} unprocessed reviews", reviews.len());

    let client = Arc::new(reqwest::Client::new());
    let provider = OpenAiProvider::new(client, config.api_key(), Some(config.openai_url.clone()));

    let classifier = SentimentClassifier::new(Arc::new(provider))
        .with_model(config.model.clone())
        .with_rate_limiter(Arc::new(FixedDelay::new(Duration::from_millis(
            config.request_delay_ms,
        ))))
        .with_hook(Arc::new(repository.clone()));

    let pipeline = SentimentPipeline::new(classifier, store);
    let (processed, saved) = pipeline.process(&reviews).await;

    info!(processed, saved, "sentiment batch finished");
    Ok(())
}
