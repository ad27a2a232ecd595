//! 基础设施资源管理
//!
//! 统一管理微服务共享的基础设施资源

use secrecy::ExposeSecret;
use shop_adapter_postgres::{PostgresConfig, create_pool};
use shop_config::AppConfig;
use shop_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryPolicy, retry_with_backoff};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化后交给服务的路由构建闭包
#[derive(Clone)]
pub struct Infrastructure {
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_min_connections(config.database.min_connections)
            .with_connect_timeout(config.database.acquire_timeout());

        let postgres_pool = retry_with_backoff(&RetryPolicy::default(), "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;

        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self { postgres_pool })
    }

    /// PgPool 内部是 Arc，clone 开销很小
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}
