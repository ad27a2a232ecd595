//! 基础设施层

mod postgres;

pub use postgres::PostgresOrderRepository;

use sqlx::migrate::Migrator;

/// 内嵌的数据库迁移
pub static MIGRATOR: Migrator = sqlx::migrate!();
