//! API 层 - HTTP 路由与处理器

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::application::ProductService;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(product_service: Arc<ProductService>) -> Self {
        Self { product_service }
    }
}

/// `/api/products` 路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::get_all_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(state)
}
