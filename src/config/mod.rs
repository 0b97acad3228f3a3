use std::env;

/// 运行配置。优先级：默认值 < .env 文件 < 环境变量 < 命令行参数
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_url: String,
    pub model: String,
    pub db_path: String,
    pub request_delay_ms: u64,
    pub batch_limit: i64,
}

impl Config {
    pub fn new() -> Self {
        // 默认配置
        let mut config = Config {
            openai_api_key: None,
            openai_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            db_path: "reviews.db".to_string(),
            request_delay_ms: 500,
            batch_limit: 50,
        };

        // 加载配置文件
        #[cfg(not(test))]
        config.load_from_env_file();
        // 加载环境变量（覆盖配置文件）
        config.load_from_env();

        config
    }

    pub fn load_from_env_file(&mut self) {
        dotenvy::dotenv().ok();
    }

    pub fn load_from_env(&mut self) {
        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            if !api_key.is_empty() {
                self.openai_api_key = Some(api_key);
            }
        }
        if let Ok(url) = env::var("OPENAI_API_URL") {
            self.openai_url = url;
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            self.model = model;
        }
        if let Ok(path) = env::var("REVIEW_DB_PATH") {
            self.db_path = path;
        }
        if let Ok(delay) = env::var("REQUEST_DELAY_MS") {
            if let Ok(value) = delay.parse() {
                self.request_delay_ms = value;
            }
        }
        if let Ok(limit) = env::var("BATCH_LIMIT") {
            if let Ok(value) = limit.parse() {
                self.batch_limit = value;
            }
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if !args.db.is_empty() {
            self.db_path = args.db.clone();
        }
        if !args.model.is_empty() {
            self.model = args.model.clone();
        }
        if args.limit > 0 {
            self.batch_limit = args.limit;
        }
        if let Some(delay_ms) = args.delay_ms {
            self.request_delay_ms = delay_ms;
        }
    }

    /// 凭证允许为空：分类器据此进入跳过分析的降级模式
    pub fn api_key(&self) -> String {
        self.openai_api_key.clone().unwrap_or_default()
    }
}
