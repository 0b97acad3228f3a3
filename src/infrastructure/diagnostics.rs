/// 注入式诊断接口。分类器与存储通过它输出 info / error 日志，
/// 测试可替换为记录型实现来断言诊断内容。
pub trait Diagnostics: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// 默认实现：转发到 tracing
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
