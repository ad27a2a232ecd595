//! 订单 HTTP 处理器

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shop_errors::AppResult;

use super::AppState;
use crate::application::dto::{OrderRequest, OrderResponse};
use crate::domain::OrderId;

pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let order = state.order_service.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_all_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderResponse>>> {
    Ok(Json(state.order_service.get_all_orders().await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderResponse>> {
    let id = OrderId::parse(&id)?;
    Ok(Json(state.order_service.get_order(&id).await?))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<OrderRequest>,
) -> AppResult<Json<OrderResponse>> {
    let id = OrderId::parse(&id)?;
    Ok(Json(state.order_service.update_order(&id, request).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = OrderId::parse(&id)?;
    state.order_service.delete_order(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
