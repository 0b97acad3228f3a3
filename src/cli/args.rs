use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "review-sentiment",
    version,
    about = "Classify app review sentiment with an LLM and store the results"
)]
pub struct Args {
    /// SQLite 数据库路径（默认取 REVIEW_DB_PATH 或 reviews.db）
    #[arg(long, default_value = "")] // 空字符串表示未指定
    pub db: String,

    /// 使用的模型
    #[arg(short, long, default_value = "")] // 空字符串表示未指定
    pub model: String,

    /// 单批最多处理的评论条数
    #[arg(long, default_value_t = 0)] // 0 表示未指定
    pub limit: i64,

    /// 每次请求后的固定等待毫秒数
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}
