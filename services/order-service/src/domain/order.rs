//! 订单聚合

use derive_more::{Display, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_common::{AuditInfo, MAX_TEXT_LEN, exceeds_text_limit, new_id, normalize_money, random_id};
use shop_errors::{AppError, AppResult};
use uuid::Uuid;

/// 订单 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析路径参数中的 ID
    pub fn parse(s: &str) -> AppResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::validation(format!("Invalid order id: {}", s)))
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

/// 单行最大数量
pub const MAX_QUANTITY: i32 = 1_000_000;

/// 单个订单最多包含的订单行数
pub const MAX_LINE_ITEMS: usize = 1_000;

/// 订单行
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub id: Uuid,
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl OrderLineItem {
    pub fn new(sku_code: impl Into<String>, price: Decimal, quantity: i32) -> AppResult<Self> {
        let sku_code = sku_code.into();
        if sku_code.trim().is_empty() {
            return Err(AppError::validation("Line item skuCode must not be blank"));
        }
        if exceeds_text_limit(&sku_code) {
            return Err(AppError::validation(format!(
                "Line item skuCode must not exceed {} characters",
                MAX_TEXT_LEN
            )));
        }
        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line item {} has a negative price",
                sku_code
            )));
        }
        let price = normalize_money(price).ok_or_else(|| {
            AppError::validation(format!("Line item {} price is out of range", sku_code))
        })?;
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(AppError::validation(format!(
                "Line item {} quantity must be between 1 and {}",
                sku_code, MAX_QUANTITY
            )));
        }

        Ok(Self {
            id: new_id(),
            sku_code,
            price,
            quantity,
        })
    }

    pub fn subtotal(&self) -> AppResult<Decimal> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                AppError::validation(format!("Line item {} subtotal overflows", self.sku_code))
            })
    }
}

/// 订单
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub line_items: Vec<OrderLineItem>,
    pub audit_info: AuditInfo,
}

impl Order {
    /// 下单，订单号为随机 UUID
    pub fn place(line_items: Vec<OrderLineItem>) -> AppResult<Self> {
        Self::check_line_items(&line_items)?;

        Ok(Self {
            id: OrderId::new(),
            order_number: random_id().to_string(),
            line_items,
            audit_info: AuditInfo::new(),
        })
    }

    /// 整体替换订单行，订单号保持不变
    pub fn replace_line_items(&mut self, line_items: Vec<OrderLineItem>) -> AppResult<()> {
        Self::check_line_items(&line_items)?;
        self.line_items = line_items;
        self.audit_info.touch();
        Ok(())
    }

    pub fn total_price(&self) -> AppResult<Decimal> {
        Self::sum_line_items(&self.line_items)
    }

    fn sum_line_items(line_items: &[OrderLineItem]) -> AppResult<Decimal> {
        line_items.iter().try_fold(Decimal::ZERO, |total, item| {
            total
                .checked_add(item.subtotal()?)
                .ok_or_else(|| AppError::validation("Order total overflows"))
        })
    }

    /// 写入前校验：非空、行数上限、总价可计算
    fn check_line_items(line_items: &[OrderLineItem]) -> AppResult<()> {
        if line_items.is_empty() {
            return Err(AppError::validation("Order must contain at least one line item"));
        }
        if line_items.len() > MAX_LINE_ITEMS {
            return Err(AppError::validation(format!(
                "Order must not contain more than {} line items",
                MAX_LINE_ITEMS
            )));
        }
        Self::sum_line_items(line_items).map(|_| ())
    }
}
