use std::sync::Arc;

use async_trait::async_trait;

use crate::ai::prompt::build_sentiment_prompt;
use crate::ai::provider::{CompletionProvider, CompletionRequest};
use crate::analysis::throttle::{FixedDelay, RateLimiter};
use crate::infrastructure::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::models::review::{ConfidencePolicy, ReviewInput, SentimentResult, Sentiment};

const SYSTEM_PROMPT: &str = "You are a sentiment analysis expert.";

/// 成功分类后的外部回调（例如把评论标记为已处理）。
/// 只在成功时触发；回调自身的失败由实现方记录，不影响批次。
#[async_trait]
pub trait ProcessedHook: Send + Sync {
    async fn mark_processed(&self, review_id: &str);
}

/// 把模型的自由文本输出归一化为固定标签。
/// 大小写不敏感的子串匹配，positive 先于 negative 检查；
/// 两者都不含时回落为 Neutral。
pub fn normalize_sentiment(raw: &str) -> Sentiment {
    let lower = raw.trim().to_lowercase();
    if lower.contains("positive") {
        Sentiment::Positive
    } else if lower.contains("negative") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// 情感分类器：逐条构建提示词、调用补全接口、归一化标签。
/// 单条失败只跳过该条；凭证缺失时整批降级为空结果。
pub struct SentimentClassifier {
    provider: Arc<dyn CompletionProvider>,
    limiter: Arc<dyn RateLimiter>,
    hook: Option<Arc<dyn ProcessedHook>>,
    policy: ConfidencePolicy,
    diagnostics: Arc<dyn Diagnostics>,
    model: Option<String>,
}

impl SentimentClassifier {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            limiter: Arc::new(FixedDelay::default()),
            hook: None,
            policy: ConfidencePolicy::default(),
            diagnostics: Arc::new(TracingDiagnostics),
            model: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn with_hook(mut self, hook: Arc<dyn ProcessedHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn with_policy(mut self, policy: ConfidencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// 批量分类。结果顺序与输入一致，失败条目原位跳过。
    pub async fn classify(&self, reviews: &[ReviewInput]) -> Vec<SentimentResult> {
        if !self.provider.is_available() {
            self.diagnostics
                .error("completion credential not configured, skipping sentiment analysis");
            return Vec::new();
        }

        let mut results = Vec::with_capacity(reviews.len());
        for review in reviews {
            self.diagnostics
                .info(&format!("analyzing sentiment for review {}", review.review_id));

            match self.classify_one(review).await {
                Ok(result) => {
                    if let Some(hook) = &self.hook {
                        hook.mark_processed(&result.review_id).await;
                    }
                    results.push(result);
                }
                Err(e) => {
                    self.diagnostics.error(&format!(
                        "sentiment analysis failed for review {}: {:#}",
                        review.review_id, e
                    ));
                }
            }

            // 无论成败都等固定间隔
            self.limiter.wait().await;
        }

        self.diagnostics.info(&format!(
            "completed sentiment analysis for {} reviews",
            results.len()
        ));
        results
    }

    async fn classify_one(&self, review: &ReviewInput) -> anyhow::Result<SentimentResult> {
        let prompt = build_sentiment_prompt(&review.review_text, review.rating);
        let mut request = CompletionRequest::single_word(SYSTEM_PROMPT, prompt);
        request.model = self.model.clone();

        let answer = self.provider.complete(&request).await?;
        let sentiment = normalize_sentiment(&answer);

        Ok(SentimentResult {
            review_id: review.review_id.clone(),
            sentiment,
            confidence: self.policy.score(sentiment),
        })
    }
}
