//! 订单应用服务

use std::sync::Arc;

use shop_errors::{AppError, AppResult};
use shop_ports::Repository;
use tracing::info;

use crate::application::dto::{OrderRequest, OrderResponse};
use crate::domain::{Order, OrderId, OrderRepository};

/// 订单应用服务
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn place_order(&self, request: OrderRequest) -> AppResult<OrderResponse> {
        let order = Order::place(request.into_line_items()?)?;
        self.repository.save(&order).await?;

        info!(
            order_id = %order.id,
            order_number = %order.order_number,
            line_items = order.line_items.len(),
            "Order placed"
        );
        order.try_into()
    }

    pub async fn get_all_orders(&self) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repository.find_all().await?;
        orders.into_iter().map(OrderResponse::try_from).collect()
    }

    pub async fn get_order(&self, id: &OrderId) -> AppResult<OrderResponse> {
        self.load(id).await.and_then(OrderResponse::try_from)
    }

    pub async fn update_order(&self, id: &OrderId, request: OrderRequest) -> AppResult<OrderResponse> {
        let mut order = self.load(id).await?;
        order.replace_line_items(request.into_line_items()?)?;
        self.repository.save(&order).await?;

        info!(order_id = %order.id, "Order updated");
        order.try_into()
    }

    pub async fn delete_order(&self, id: &OrderId) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!(order_id = %id, "Order deleted");
        Ok(())
    }

    async fn load(&self, id: &OrderId) -> AppResult<Order> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))
    }
}
