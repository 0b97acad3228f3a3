pub mod pipeline;
pub mod sentiment;
pub mod throttle;

pub use pipeline::SentimentPipeline;
pub use sentiment::{normalize_sentiment, ProcessedHook, SentimentClassifier};
pub use throttle::{FixedDelay, NoThrottle, RateLimiter};
