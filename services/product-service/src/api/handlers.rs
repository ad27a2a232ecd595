//! 商品 HTTP 处理器

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shop_errors::AppResult;

use super::AppState;
use crate::application::dto::{ProductRequest, ProductResponse};
use crate::domain::ProductId;

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.product_service.create_product(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_all_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    Ok(Json(state.product_service.get_all_products().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let id = ProductId::parse(&id)?;
    Ok(Json(state.product_service.get_product(&id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let id = ProductId::parse(&id)?;
    Ok(Json(state.product_service.update_product(&id, request).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = ProductId::parse(&id)?;
    state.product_service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
