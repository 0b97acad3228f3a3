use std::str::FromStr;
use std::sync::Arc;

use sqlx::{Row, SqlitePool};

use crate::infrastructure::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::models::review::{Sentiment, SentimentResult};

/// 情感结果存储：按 review_id 幂等覆盖写入，同一 id 至多一行
pub struct SentimentStore {
    pool: SqlitePool,
    diagnostics: Arc<dyn Diagnostics>,
}

impl SentimentStore {
    pub async fn new(pool: SqlitePool) -> anyhow::Result<Self> {
        let store = Self {
            pool,
            diagnostics: Arc::new(TracingDiagnostics),
        };
        store.create_tables().await?;
        Ok(store)
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    async fn create_tables(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sentiment (
                review_id TEXT PRIMARY KEY,
                sentiment TEXT NOT NULL,
                confidence REAL NOT NULL CHECK (confidence >= 0 AND confidence <= 1)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 保存一批结果。空批次直接返回 0，不触达连接；
    /// 全部写入共用一个事务，任一条失败则整体回滚并返回 0。
    /// 错误只记日志，不向调用方传播。
    pub async fn save(&self, results: &[SentimentResult]) -> usize {
        if results.is_empty() {
            return 0;
        }

        match self.save_all(results).await {
            Ok(count) => count,
            Err(e) => {
                self.diagnostics
                    .error(&format!("error saving sentiment results: {:#}", e));
                0
            }
        }
    }

    async fn save_all(&self, results: &[SentimentResult]) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;

        for result in results {
            sqlx::query(
                "INSERT OR REPLACE INTO sentiment (review_id, sentiment, confidence) VALUES (?, ?, ?)",
            )
            .bind(&result.review_id)
            .bind(result.sentiment.as_str())
            .bind(result.confidence)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(results.len())
    }

    /// 按 review_id 读取一条结果
    pub async fn get(&self, review_id: &str) -> anyhow::Result<Option<SentimentResult>> {
        let row = sqlx::query(
            "SELECT review_id, sentiment, confidence FROM sentiment WHERE review_id = ?",
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> anyhow::Result<SentimentResult> {
            let label: String = row.try_get("sentiment")?;
            Ok(SentimentResult {
                review_id: row.try_get("review_id")?,
                sentiment: Sentiment::from_str(&label)?,
                confidence: row.try_get("confidence")?,
            })
        })
        .transpose()
    }

    pub async fn count(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM sentiment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
