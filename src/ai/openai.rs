use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::provider::{CompletionError, CompletionProvider, CompletionRequest};

/// OpenAI 兼容的补全提供商
pub struct OpenAiProvider {
    client: Arc<reqwest::Client>,
    config: OpenAiProviderConfig,
}

#[derive(Debug, Clone)]
struct OpenAiProviderConfig {
    api_key: String,
    base_url: String,
    default_model: String,
}

/// Chat Completions API 请求结构
#[derive(Debug, Serialize)]
struct ChatApiRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

/// 消息结构
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat Completions API 响应结构
#[derive(Debug, Deserialize)]
struct ChatApiResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OpenAiProvider {
    /// 创建新的 OpenAI 提供商
    pub fn new(client: Arc<reqwest::Client>, api_key: String, base_url: Option<String>) -> Self {
        let config = OpenAiProviderConfig {
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            default_model: "gpt-3.5-turbo".to_string(),
        };

        Self { client, config }
    }

    /// 构建 API 请求
    fn build_request(&self, request: &CompletionRequest) -> ChatApiRequest {
        let model = request
            .model
            .as_ref()
            .unwrap_or(&self.config.default_model)
            .clone();

        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            },
        ];

        ChatApiRequest {
            model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    /// 发送请求
    async fn send_request(&self, request: &ChatApiRequest) -> Result<ChatApiResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_request = self.build_request(request);
        let api_response = self.send_request(&api_request).await?;

        let content = api_response
            .choices
            .first()
            .ok_or(CompletionError::EmptyChoices)?
            .message
            .content
            .clone();

        Ok(content)
    }
}
