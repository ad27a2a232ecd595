//! 商品应用服务

use std::sync::Arc;

use shop_errors::{AppError, AppResult};
use shop_ports::Repository;
use tracing::info;

use crate::application::dto::{ProductRequest, ProductResponse};
use crate::domain::{Product, ProductId, ProductRepository};

/// 商品应用服务
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_product(&self, request: ProductRequest) -> AppResult<ProductResponse> {
        let product = Product::new(request.name, request.description, request.price)?;
        self.repository.save(&product).await?;

        info!(product_id = %product.id, "Product is saved");
        Ok(product.into())
    }

    pub async fn get_all_products(&self) -> AppResult<Vec<ProductResponse>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn get_product(&self, id: &ProductId) -> AppResult<ProductResponse> {
        self.load(id).await.map(ProductResponse::from)
    }

    pub async fn update_product(
        &self,
        id: &ProductId,
        request: ProductRequest,
    ) -> AppResult<ProductResponse> {
        let mut product = self.load(id).await?;
        product.update(request.name, request.description, request.price)?;
        self.repository.save(&product).await?;

        info!(product_id = %product.id, "Product is updated");
        Ok(product.into())
    }

    pub async fn delete_product(&self, id: &ProductId) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!(product_id = %id, "Product is deleted");
        Ok(())
    }

    async fn load(&self, id: &ProductId) -> AppResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", id)))
    }
}
