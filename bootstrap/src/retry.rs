//! 重试工具模块
//!
//! 启动阶段连接外部依赖时使用的指数退避

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

/// 退避策略
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 最大尝试次数（包含首次）
    pub max_attempts: u32,
    /// 首次重试前的等待
    pub initial_delay: Duration,
    /// 等待上限
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay,
        }
    }

    /// 第 n 次失败后的等待时间（n 从 0 开始），每次翻倍
    pub fn backoff(&self, failures: u32) -> Duration {
        let factor = 1u32.checked_shl(failures).unwrap_or(u32::MAX);
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// 按策略重试异步操作，返回最后一次的错误
pub async fn retry_with_backoff<F, Fut, T, E>(
    policy: &RetryPolicy,
    what: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut failures = 0;
    loop {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    info!(operation = what, attempts = failures + 1, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if failures + 1 >= policy.max_attempts => {
                warn!(operation = what, attempts = failures + 1, error = %e, "Giving up");
                return Err(e);
            }
            Err(e) => {
                let delay = policy.backoff(failures);
                warn!(
                    operation = what,
                    attempt = failures + 1,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
                failures += 1;
            }
        }
    }
}
