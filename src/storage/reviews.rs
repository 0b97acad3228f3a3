use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::error;

use crate::analysis::sentiment::ProcessedHook;
use crate::models::review::ReviewInput;

/// 评论表访问层。评论由外部采集方写入，本核心读取未处理
/// 的评论并在分类成功后标记 processed。
#[derive(Clone)]
pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    pub async fn new(pool: SqlitePool) -> anyhow::Result<Self> {
        let repository = Self { pool };
        repository.create_tables().await?;
        Ok(repository)
    }

    async fn create_tables(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                review_id TEXT UNIQUE,
                app_id TEXT,
                username TEXT,
                review_text TEXT,
                rating INTEGER,
                timestamp TEXT,
                date_added TEXT,
                processed BOOLEAN DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 写入一条评论（测试与采集方共用的最小入口）
    pub async fn insert_review(&self, review: &ReviewInput) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO reviews (review_id, review_text, rating, date_added, processed)
            VALUES (?, ?, ?, datetime('now'), FALSE)
            "#,
        )
        .bind(&review.review_id)
        .bind(&review.review_text)
        .bind(review.rating)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 取出尚未处理的评论，按入库顺序
    pub async fn get_unprocessed(&self, limit: i64) -> anyhow::Result<Vec<ReviewInput>> {
        let rows = sqlx::query(
            r#"
            SELECT review_id, review_text, rating FROM reviews
            WHERE processed = FALSE
            ORDER BY id
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut reviews = Vec::with_capacity(rows.len());
        for row in rows {
            reviews.push(ReviewInput {
                review_id: row.try_get("review_id")?,
                review_text: row.try_get::<Option<String>, _>("review_text")?.unwrap_or_default(),
                rating: row.try_get("rating")?,
            });
        }

        Ok(reviews)
    }

    pub async fn set_processed(&self, review_id: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE reviews SET processed = TRUE WHERE review_id = ?")
            .bind(review_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn is_processed(&self, review_id: &str) -> anyhow::Result<bool> {
        let processed =
            sqlx::query_scalar("SELECT processed FROM reviews WHERE review_id = ?")
                .bind(review_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(processed)
    }
}

#[async_trait]
impl ProcessedHook for ReviewRepository {
    /// fire-and-forget：标记失败只记日志，不影响分类批次
    async fn mark_processed(&self, review_id: &str) {
        if let Err(e) = self.set_processed(review_id).await {
            error!("error marking review {} as processed: {:#}", review_id, e);
        }
    }
}
