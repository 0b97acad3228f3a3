use review_sentiment::models::review::{Sentiment, SentimentResult};
use review_sentiment::storage::SentimentStore;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

// 单连接池：内存库对每个连接都是独立的
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

fn result(id: &str, sentiment: Sentiment, confidence: f64) -> SentimentResult {
    SentimentResult {
        review_id: id.to_string(),
        sentiment,
        confidence,
    }
}

#[tokio::test]
async fn test_save_empty_batch_returns_zero() {
    let pool = memory_pool().await;
    let store = SentimentStore::new(pool).await.expect("Failed to create store");

    assert_eq!(store.save(&[]).await, 0);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_save_and_get_roundtrip() {
    let pool = memory_pool().await;
    let store = SentimentStore::new(pool).await.expect("Failed to create store");

    let results = vec![
        result("1", Sentiment::Positive, 0.9),
        result("2", Sentiment::Negative, 0.9),
    ];
    assert_eq!(store.save(&results).await, 2);

    let first = store.get("1").await.unwrap().expect("row missing");
    assert_eq!(first.sentiment, Sentiment::Positive);
    assert_eq!(first.confidence, 0.9);

    let second = store.get("2").await.unwrap().expect("row missing");
    assert_eq!(second.sentiment, Sentiment::Negative);

    assert!(store.get("3").await.unwrap().is_none());
}

#[tokio::test]
async fn test_upsert_replaces_existing_row() {
    let pool = memory_pool().await;
    let store = SentimentStore::new(pool).await.expect("Failed to create store");

    assert_eq!(store.save(&[result("1", Sentiment::Positive, 0.9)]).await, 1);
    assert_eq!(store.save(&[result("1", Sentiment::Negative, 0.7)]).await, 1);

    // 同一 review_id 只留一行，且是第二次写入的值
    assert_eq!(store.count().await.unwrap(), 1);
    let row = store.get("1").await.unwrap().expect("row missing");
    assert_eq!(row.sentiment, Sentiment::Negative);
    assert_eq!(row.confidence, 0.7);
}

#[tokio::test]
async fn test_failed_batch_rolls_back_completely() {
    let pool = memory_pool().await;
    let store = SentimentStore::new(pool).await.expect("Failed to create store");

    // 第二条违反 confidence 的 CHECK 约束，整批必须回滚
    let results = vec![
        result("1", Sentiment::Positive, 0.9),
        result("2", Sentiment::Neutral, 1.5),
    ];

    assert_eq!(store.save(&results).await, 0);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_batch_keeps_prior_rows_untouched() {
    let pool = memory_pool().await;
    let store = SentimentStore::new(pool).await.expect("Failed to create store");

    assert_eq!(store.save(&[result("1", Sentiment::Positive, 0.9)]).await, 1);

    // 失败批次里对 "1" 的改写也要随回滚消失
    let failing = vec![
        result("1", Sentiment::Negative, 0.9),
        result("2", Sentiment::Neutral, -0.1),
    ];
    assert_eq!(store.save(&failing).await, 0);

    assert_eq!(store.count().await.unwrap(), 1);
    let row = store.get("1").await.unwrap().expect("row missing");
    assert_eq!(row.sentiment, Sentiment::Positive);
}
