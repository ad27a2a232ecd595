//! 订单请求/响应 DTO
//!
//! JSON 字段使用 camelCase

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_errors::{AppError, AppResult};

use crate::domain::{Order, OrderLineItem};

/// 下单/改单请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_line_items_dto_list: Vec<OrderLineItemsDto>,
}

impl OrderRequest {
    pub fn new(order_line_items_dto_list: Vec<OrderLineItemsDto>) -> Self {
        Self {
            order_line_items_dto_list,
        }
    }

    /// 转换为领域对象，逐行校验
    pub fn into_line_items(self) -> AppResult<Vec<OrderLineItem>> {
        self.order_line_items_dto_list
            .into_iter()
            .map(|dto| OrderLineItem::new(dto.sku_code, dto.price, dto.quantity))
            .collect()
    }
}

/// 订单行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemsDto {
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl OrderLineItemsDto {
    pub fn new(sku_code: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            sku_code: sku_code.into(),
            price,
            quantity,
        }
    }
}

impl From<OrderLineItem> for OrderLineItemsDto {
    fn from(item: OrderLineItem) -> Self {
        Self {
            sku_code: item.sku_code,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// 订单响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub order_number: String,
    pub order_line_items_dto_list: Vec<OrderLineItemsDto>,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Order> for OrderResponse {
    type Error = AppError;

    fn try_from(order: Order) -> AppResult<Self> {
        let total_price = order.total_price()?;
        Ok(Self {
            id: order.id.to_string(),
            order_number: order.order_number,
            order_line_items_dto_list: order
                .line_items
                .into_iter()
                .map(OrderLineItemsDto::from)
                .collect(),
            total_price,
            created_at: order.audit_info.created_at,
            updated_at: order.audit_info.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request: OrderRequest = serde_json::from_str(
            r#"{"orderLineItemsDtoList":[{"skuCode":"iphone_13","price":1200,"quantity":1}]}"#,
        )
        .unwrap();

        assert_eq!(
            request.order_line_items_dto_list,
            vec![OrderLineItemsDto::new("iphone_13", Decimal::from(1200), 1)]
        );
    }

    #[test]
    fn test_into_line_items_rejects_bad_row() {
        let request = OrderRequest::new(vec![
            OrderLineItemsDto::new("iphone_13", Decimal::from(1200), 1),
            OrderLineItemsDto::new("case", Decimal::from(20), 0),
        ]);
        assert!(matches!(
            request.into_line_items(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let order = Order::place(vec![
            OrderLineItem::new("iphone_13", Decimal::from(1200), 2).unwrap(),
        ])
        .unwrap();
        let json = serde_json::to_value(OrderResponse::try_from(order).unwrap()).unwrap();

        assert!(json.get("orderNumber").is_some());
        assert_eq!(json["orderLineItemsDtoList"][0]["skuCode"], "iphone_13");
        assert!(json.get("totalPrice").is_some());
    }
}
