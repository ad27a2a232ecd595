//! 商品请求/响应 DTO

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Product;

/// 创建/更新商品请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}

impl ProductRequest {
    pub fn builder() -> ProductRequestBuilder {
        ProductRequestBuilder::default()
    }
}

/// `ProductRequest` 构建器
#[derive(Debug, Default)]
pub struct ProductRequestBuilder {
    name: String,
    description: String,
    price: Decimal,
}

impl ProductRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn build(self) -> ProductRequest {
        ProductRequest {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// 商品响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.audit_info.created_at,
            updated_at: product.audit_info.updated_at,
        }
    }
}
