use async_trait::async_trait;
use thiserror::Error;

/// 一次补全调用的参数
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// 单词分类场景：温度压到 0，输出长度限制到一个词
    pub fn single_word(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            model: None,
            temperature: Some(0.0),
            max_tokens: Some(10),
        }
    }
}

/// 补全接口错误
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("completion response contained no choices")]
    EmptyChoices,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// 补全服务提供商
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    /// 凭证是否已配置。空凭证视为未配置，调用方据此进入降级模式。
    fn is_available(&self) -> bool;

    /// 发送请求并返回首个 choice 的文本
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_request_pins_decoding() {
        let request = CompletionRequest::single_word("expert", "classify this");
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(10));
        assert_eq!(request.system, "expert");
        assert_eq!(request.prompt, "classify this");
        assert!(request.model.is_none());
    }
}
