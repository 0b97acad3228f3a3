use std::time::Duration;

use async_trait::async_trait;

/// 限流能力：每次补全调用之后等待一次
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn wait(&self);
}

/// 固定间隔限流，对上游接口的基本礼貌
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(500)
    }
}

#[async_trait]
impl RateLimiter for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// 不等待，测试用
#[derive(Debug, Default)]
pub struct NoThrottle;

#[async_trait]
impl RateLimiter for NoThrottle {
    async fn wait(&self) {}
}
