//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::{middleware, Router};
use shop_config::AppConfig;
use shop_errors::AppResult;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::{HealthChecker, health_routes};
use crate::infrastructure::Infrastructure;
use crate::http_metrics::{MetricsRecorder, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 请求体大小上限
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 配置目录，可通过 `APP_CONFIG_DIR` 覆盖
pub fn config_dir() -> String {
    std::env::var("APP_CONFIG_DIR").unwrap_or_else(|_| "config".to_string())
}

/// 为路由挂载通用中间件：HTTP 指标、请求追踪、请求体大小限制
pub fn with_common_layers(router: Router) -> Router {
    router
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// 运行 HTTP 服务
///
/// 所有微服务的统一入口点：
/// 1. 加载配置并初始化日志
/// 2. 安装 Prometheus recorder
/// 3. 创建数据库连接池（带重试）
/// 4. 调用服务提供的闭包构建业务路由
/// 5. 合并 /health、/ready、/metrics 并启动服务器，处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// shop_bootstrap::run("config", |infra| async move {
///     Ok(build_router(infra.postgres_pool()))
/// })
/// .await
/// ```
pub async fn run<F, Fut>(config_dir: &str, router_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = match MetricsRecorder::install() {
        Ok(recorder) => Some(recorder),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    let infra = Infrastructure::from_config(&config).await?;
    let pool = infra.postgres_pool();
    let health = HealthChecker::new(pool.clone());

    let api = router_builder(infra).await?;
    let app = with_common_layers(api.merge(health_routes(health, metrics)));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Service stopped");

    Ok(())
}
