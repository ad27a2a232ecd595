//! PostgreSQL 迁移管理模块
//!
//! 各服务通过 `sqlx::migrate!()` 内嵌自己的 `migrations/` 目录，
//! 启动时统一在这里执行

use shop_errors::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

/// 执行所有未应用的迁移
pub async fn run_migrations(pool: &PgPool, migrator: &Migrator) -> AppResult<()> {
    let total = migrator.iter().count();
    info!(total_migrations = total, "Running database migrations");

    migrator
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to run migrations: {}", e)))?;

    info!("Database migrations completed");
    Ok(())
}
