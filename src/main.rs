// src/main.rs

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod common;
mod config;
mod db;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // If configuration fails, the application should not start.
    let app_state = AppState::new()
        .await
        .expect("Failed to initialize application state.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Failed to run database migrations.");

    tracing::info!("database migrations applied");

    // Public registration/login.
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::get_me));

    // The storefront listings are public; everything else on shops requires
    // the AuthenticatedUser extractor inside the handler.
    let shop_routes = Router::new()
        .route(
            "/with-products",
            get(handlers::shops::list_shops_with_products),
        )
        .route(
            "/",
            get(handlers::shops::list_my_shops).post(handlers::shops::create_shop),
        )
        .route(
            "/{id}",
            get(handlers::shops::get_shop)
                .put(handlers::shops::update_shop)
                .delete(handlers::shops::delete_shop),
        );

    let product_routes = Router::new()
        .route("/", post(handlers::products::create_product))
        .route(
            "/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route("/{id}/buy", post(handlers::products::buy_product));

    let order_routes = Router::new()
        .route("/shop/{shop_id}", get(handlers::orders::list_shop_orders))
        .route("/{id}/status", put(handlers::orders::update_order_status));

    let app = Router::new()
        .route("/api/health", get(|| async { Json(json!({ "ok": true })) }))
        .nest("/api/auth", auth_routes)
        .nest("/api/shops", shop_routes)
        .nest("/api/products", product_routes)
        .nest("/api/orders", order_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind TCP listener");
    tracing::info!("server listening on {}", addr);
    axum::serve(listener, app).await.expect("Axum server error");
}
