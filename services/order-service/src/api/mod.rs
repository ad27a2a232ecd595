//! API 层 - HTTP 路由与处理器

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::application::OrderService;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
}

impl AppState {
    pub fn new(order_service: Arc<OrderService>) -> Self {
        Self { order_service }
    }
}

/// `/api/order` 路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/order",
            get(handlers::get_all_orders).post(handlers::place_order),
        )
        .route(
            "/api/order/{id}",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .with_state(state)
}
