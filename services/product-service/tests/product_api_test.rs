//! 商品 API 集成测试
//!
//! 每个测试由 `#[sqlx::test]` 创建独立的临时数据库并执行 migrations/，
//! 需要设置 DATABASE_URL 指向可用的 PostgreSQL。

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_service::application::dto::{ProductRequest, ProductResponse};
use product_service::build_router;
use product_service::domain::Product;
use product_service::infrastructure::PostgresProductRepository;
use rust_decimal::Decimal;
use shop_bootstrap::with_common_layers;
use shop_errors::ProblemDetails;
use shop_ports::Repository;
use sqlx::PgPool;
use tower::ServiceExt;

fn app(pool: PgPool) -> Router {
    with_common_layers(build_router(pool))
}

fn product_request() -> ProductRequest {
    ProductRequest::builder()
        .name("iPhone 13")
        .description("iPhone 13")
        .price(Decimal::from(1200))
        .build()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&ProductRequest>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[sqlx::test]
async fn should_create_product(pool: PgPool) {
    let app = app(pool.clone());

    let (status, body) = send(&app, Method::POST, "/api/products", Some(&product_request())).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.name, "iPhone 13");

    let repository = PostgresProductRepository::new(pool);
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn should_get_all_products(pool: PgPool) {
    let repository = PostgresProductRepository::new(pool.clone());
    let product = Product::new("iPhone 13", "iPhone 13", Decimal::from(1200)).unwrap();
    repository.save(&product).await.unwrap();

    let request = Request::get("/api/products").body(Body::empty()).unwrap();
    let response = app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let products: Vec<ProductResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, product.id.to_string());
}

#[sqlx::test]
async fn posted_product_is_listed(pool: PgPool) {
    let app = app(pool);

    let (status, _) = send(&app, Method::POST, "/api/products", Some(&product_request())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let products: Vec<ProductResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "iPhone 13");
    assert_eq!(products[0].description, "iPhone 13");
    assert_eq!(products[0].price, Decimal::from(1200));
}

#[sqlx::test]
async fn should_update_and_delete_product(pool: PgPool) {
    let app = app(pool);

    let (_, body) = send(&app, Method::POST, "/api/products", Some(&product_request())).await;
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    let uri = format!("/api/products/{}", created.id);

    let update = ProductRequest::builder()
        .name("iPhone 13")
        .description("refurbished")
        .price(Decimal::from(900))
        .build();
    let (status, body) = send(&app, Method::PUT, &uri, Some(&update)).await;
    assert_eq!(status, StatusCode::OK);
    let updated: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "refurbished");
    assert_eq!(updated.price, Decimal::from(900));

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched.price, Decimal::from(900));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let problem: ProblemDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem.status, 404);
}

#[sqlx::test]
async fn should_reject_invalid_requests(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, Method::GET, "/api/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: ProblemDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem.title, "Validation Error");

    let blank = ProductRequest::builder().price(Decimal::from(10)).build();
    let (status, _) = send(&app, Method::POST, "/api/products", Some(&blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products: Vec<ProductResponse> = serde_json::from_slice(&body).unwrap();
    assert!(products.is_empty());
}

#[sqlx::test]
async fn write_responses_match_stored_product(pool: PgPool) {
    let app = app(pool);

    let request = ProductRequest::builder()
        .name("Pen")
        .price(Decimal::new(19_999, 3))
        .build();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(&request)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.price, Decimal::from(20));

    let (_, body) = send(&app, Method::GET, "/api/products", None).await;
    let products: Vec<ProductResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(products, vec![created.clone()]);

    let uri = format!("/api/products/{}", created.id);
    let update = ProductRequest::builder()
        .name("Pen")
        .price(Decimal::new(1_006, 3))
        .build();
    let (status, body) = send(&app, Method::PUT, &uri, Some(&update)).await;
    assert_eq!(status, StatusCode::OK);
    let updated: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.price, Decimal::new(101, 2));

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    let fetched: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, updated);
}

#[sqlx::test]
async fn values_beyond_column_limits_are_bad_requests(pool: PgPool) {
    let app = app(pool);

    let long_name = ProductRequest::builder()
        .name("n".repeat(300))
        .price(Decimal::ONE)
        .build();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(&long_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: ProblemDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem.title, "Validation Error");

    let huge_price = ProductRequest::builder()
        .name("Yacht")
        .price(Decimal::from_i128_with_scale(10_i128.pow(20), 0))
        .build();
    let (status, _) = send(&app, Method::POST, "/api/products", Some(&huge_price)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/products", None).await;
    let products: Vec<ProductResponse> = serde_json::from_slice(&body).unwrap();
    assert!(products.is_empty());
}
