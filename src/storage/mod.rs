pub mod reviews;
pub mod sentiment_store;

pub use reviews::ReviewRepository;
pub use sentiment_store::SentimentStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// 打开（必要时创建）SQLite 数据库
pub async fn connect(path: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}
