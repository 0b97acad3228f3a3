use crate::analysis::sentiment::SentimentClassifier;
use crate::models::review::ReviewInput;
use crate::storage::sentiment_store::SentimentStore;

/// 批处理协调器：串联分类器与结果存储
pub struct SentimentPipeline {
    classifier: SentimentClassifier,
    store: SentimentStore,
}

impl SentimentPipeline {
    pub fn new(classifier: SentimentClassifier, store: SentimentStore) -> Self {
        Self { classifier, store }
    }

    /// 处理一批评论，返回 (成功分类条数, 实际落库条数)。
    /// 空输入直接返回 (0, 0)，不触达网络与数据库。
    pub async fn process(&self, reviews: &[ReviewInput]) -> (usize, usize) {
        if reviews.is_empty() {
            return (0, 0);
        }

        let results = self.classifier.classify(reviews).await;
        let saved = self.store.save(&results).await;

        (results.len(), saved)
    }
}
