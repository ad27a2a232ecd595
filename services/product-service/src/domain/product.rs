//! 商品聚合

use derive_more::{Display, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_common::{AuditInfo, MAX_TEXT_LEN, exceeds_text_limit, new_id, normalize_money};
use shop_errors::{AppError, AppResult};
use uuid::Uuid;

/// 商品 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ProductId(pub Uuid);

impl ProductId {
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
            .map_err(|_| AppError::validation(format!("Invalid product id: {}", s)))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

/// 商品
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub audit_info: AuditInfo,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> AppResult<Self> {
        let name = name.into();
        let price = Self::validate(&name, price)?;

        Ok(Self {
            id: ProductId::new(),
            name,
            description: description.into(),
            price,
            audit_info: AuditInfo::new(),
        })
    }

    /// 整体替换可编辑字段
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> AppResult<()> {
        let name = name.into();
        let price = Self::validate(&name, price)?;

        self.name = name;
        self.description = description.into();
        self.price = price;
        self.audit_info.touch();
        Ok(())
    }

    /// 校验名称与价格，返回按存储精度规整后的价格
    fn validate(name: &str, price: Decimal) -> AppResult<Decimal> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Product name must not be blank"));
        }
        if exceeds_text_limit(name) {
            return Err(AppError::validation(format!(
                "Product name must not exceed {} characters",
                MAX_TEXT_LEN
            )));
        }
        if price < Decimal::ZERO {
            return Err(AppError::validation("Product price must not be negative"));
        }
        normalize_money(price)
            .ok_or_else(|| AppError::validation("Product price is out of range"))
    }
}
