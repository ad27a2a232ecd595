//! PostgreSQL 商品仓储实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shop_adapter_postgres::map_db_error;
use shop_common::AuditInfo;
use shop_errors::{AppError, AppResult};
use shop_ports::Repository;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Product, ProductId, ProductRepository};

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            audit_info: AuditInfo::restore(row.created_at, row.updated_at),
        }
    }
}

/// PostgreSQL 商品仓储
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        debug!(product_id = %id, "Finding product by ID");

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to find product", e))?;

        Ok(row.map(Product::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list products", e))?;

        debug!(count = rows.len(), "Products loaded");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        debug!(product_id = %product.id, name = %product.name, "Saving product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.audit_info.created_at)
        .bind(product.audit_info.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to save product", e))?;

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete product", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Product {}", id)));
        }

        debug!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn exists(&self, id: &ProductId) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id.0)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to check product", e))?;

        Ok(exists)
    }

    async fn count(&self) -> AppResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count products", e))?;

        Ok(count as u64)
    }
}

impl ProductRepository for PostgresProductRepository {}
