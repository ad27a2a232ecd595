//! 通用类型定义

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// 审计信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 当前时间，截断到微秒以匹配 TIMESTAMPTZ 的精度
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl AuditInfo {
    pub fn new() -> Self {
        let now = now_micros();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// 从已持久化的时间戳恢复
    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = now_micros();
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}
