use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 待分析的应用评论（由外部采集方提供，本核心只读）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    pub review_id: String,
    pub review_text: String,
    pub rating: i64,
}

/// 情感分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl FromStr for Sentiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Neutral" => Ok(Sentiment::Neutral),
            "Negative" => Ok(Sentiment::Negative),
            other => Err(anyhow::anyhow!("unknown sentiment label: {}", other)),
        }
    }
}

/// 单条评论的情感分析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub review_id: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// 置信度策略表：按标签给出固定置信度（策略值，不是模型概率）
#[derive(Debug, Clone)]
pub struct ConfidencePolicy {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            positive: 0.9,
            neutral: 0.9,
            negative: 0.9,
        }
    }
}

impl ConfidencePolicy {
    pub fn score(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}
