//! product-service - 商品服务
//!
//! 通过 `/api/products` 暴露商品的 CRUD 接口

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use api::AppState;
use application::ProductService;
use infrastructure::PostgresProductRepository;

/// 组装仓储、应用服务和路由
pub fn build_router(pool: PgPool) -> Router {
    let repository = Arc::new(PostgresProductRepository::new(pool));
    let service = Arc::new(ProductService::new(repository));
    api::router(AppState::new(service))
}
