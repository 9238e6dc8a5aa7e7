// src/config.rs

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{OrderRepository, ProductRepository, ShopRepository, UserRepository},
    services::{
        auth::AuthService, catalog_service::CatalogService, order_service::OrderService,
        shop_service::ShopService,
    },
};

// Everything a request handler needs, built once at startup and passed down
// through axum state instead of living in globals.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub shop_service: ShopService,
    pub catalog_service: CatalogService,
    pub order_service: OrderService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("database connection established");

        // Wire the dependency graph: repositories, then the services on top.
        let user_repo = UserRepository::new(db_pool.clone());
        let shop_repo = ShopRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let order_repo = OrderRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let shop_service = ShopService::new(
            shop_repo.clone(),
            product_repo.clone(),
            db_pool.clone(),
        );
        let catalog_service = CatalogService::new(product_repo.clone(), shop_repo.clone());
        let order_service = OrderService::new(order_repo, product_repo, shop_repo);

        Ok(Self {
            db_pool,
            auth_service,
            shop_service,
            catalog_service,
            order_service,
        })
    }
}
