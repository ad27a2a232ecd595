//! order-service - 订单服务
//!
//! 通过 `/api/order` 暴露订单的 CRUD 接口

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use api::AppState;
use application::OrderService;
use infrastructure::PostgresOrderRepository;

/// 组装仓储、应用服务和路由
pub fn build_router(pool: PgPool) -> Router {
    let repository = Arc::new(PostgresOrderRepository::new(pool));
    let service = Arc::new(OrderService::new(repository));
    api::router(AppState::new(service))
}
