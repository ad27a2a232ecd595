//! product-service 入口

use product_service::{build_router, infrastructure::MIGRATOR};
use shop_adapter_postgres::run_migrations;
use shop_bootstrap::{Infrastructure, config_dir, run};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run(&config_dir(), |infra: Infrastructure| async move {
        let pool = infra.postgres_pool();
        run_migrations(&pool, &MIGRATOR).await?;

        info!("Initializing product-service routes");
        Ok(build_router(pool))
    })
    .await
}
