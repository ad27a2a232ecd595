//! PostgreSQL 订单仓储实现
//!
//! 订单头与订单行在同一事务中写入，更新时订单行整体替换

use std::collections::HashMap;

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

use crate::domain::{Order, OrderId, OrderLineItem, OrderRepository};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct LineItemRow {
    id: Uuid,
    order_id: Uuid,
    sku_code: String,
    price: Decimal,
    quantity: i32,
}

impl From<LineItemRow> for OrderLineItem {
    fn from(row: LineItemRow) -> Self {
        Self {
            id: row.id,
            sku_code: row.sku_code,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

fn assemble(row: OrderRow, line_items: Vec<OrderLineItem>) -> Order {
    Order {
        id: OrderId::from_uuid(row.id),
        order_number: row.order_number,
        line_items,
        audit_info: AuditInfo::restore(row.created_at, row.updated_at),
    }
}

/// PostgreSQL 订单仓储
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_line_items(&self, order_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<OrderLineItem>>> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LineItemRow>(
            r#"
            SELECT id, order_id, sku_code, price, quantity
            FROM order_line_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, position
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to load order line items", e))?;

        let mut grouped: HashMap<Uuid, Vec<OrderLineItem>> = HashMap::new();
        for row in rows {
            grouped.entry(row.order_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl Repository<Order, OrderId> for PostgresOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        debug!(order_id = %id, "Finding order by ID");

        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, order_number, created_at, updated_at FROM orders WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to find order", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut items = self.load_line_items(&[row.id]).await?;
        let line_items = items.remove(&row.id).unwrap_or_default();
        Ok(Some(assemble(row, line_items)))
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, order_number, created_at, updated_at
            FROM orders
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list orders", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut items = self.load_line_items(&ids).await?;

        debug!(count = rows.len(), "Orders loaded");
        Ok(rows
            .into_iter()
            .map(|row| {
                let line_items = items.remove(&row.id).unwrap_or_default();
                assemble(row, line_items)
            })
            .collect())
    }

    async fn save(&self, order: &Order) -> AppResult<()> {
        debug!(
            order_id = %order.id,
            order_number = %order.order_number,
            line_items = order.line_items.len(),
            "Saving order"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                order_number = EXCLUDED.order_number,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(order.id.0)
        .bind(&order.order_number)
        .bind(order.audit_info.created_at)
        .bind(order.audit_info.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to save order", e))?;

        sqlx::query("DELETE FROM order_line_items WHERE order_id = $1")
            .bind(order.id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Failed to clear order line items", e))?;

        for (position, item) in order.line_items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_line_items (id, order_id, position, sku_code, price, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id)
            .bind(order.id.0)
            .bind(position as i32)
            .bind(&item.sku_code)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Failed to save order line item", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_db_error("Failed to commit order", e))?;

        Ok(())
    }

    async fn delete(&self, id: &OrderId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete order", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Order {}", id)));
        }

        debug!(order_id = %id, "Order deleted");
        Ok(())
    }

    async fn exists(&self, id: &OrderId) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to check order", e))?;

        Ok(exists)
    }

    async fn count(&self) -> AppResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count orders", e))?;

        Ok(count as u64)
    }
}

impl OrderRepository for PostgresOrderRepository {}
