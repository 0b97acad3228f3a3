pub mod review;

pub use review::{ConfidencePolicy, ReviewInput, Sentiment, SentimentResult};
