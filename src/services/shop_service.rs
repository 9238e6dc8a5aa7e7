// src/services/shop_service.rs

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, ownership::ensure_owner},
    db::{ProductRepository, ShopRepository},
    models::{
        product::Product,
        shop::{Shop, ShopWithProducts},
    },
};

#[derive(Clone)]
pub struct ShopService {
    shop_repo: ShopRepository,
    product_repo: ProductRepository,
    pool: PgPool,
}

impl ShopService {
    pub fn new(shop_repo: ShopRepository, product_repo: ProductRepository, pool: PgPool) -> Self {
        Self {
            shop_repo,
            product_repo,
            pool,
        }
    }

    // Two queries and an in-memory group-by: one for the shops, one for all
    // of their products.
    async fn embed_products(&self, shops: Vec<Shop>) -> Result<Vec<ShopWithProducts>, AppError> {
        let shop_ids: Vec<Uuid> = shops.iter().map(|s| s.id).collect();
        let products = self.product_repo.list_by_shops(&shop_ids).await?;

        let mut by_shop: HashMap<Uuid, Vec<Product>> = HashMap::new();
        for product in products {
            by_shop.entry(product.shop_id).or_default().push(product);
        }

        Ok(shops
            .into_iter()
            .map(|shop| {
                let products = by_shop.remove(&shop.id).unwrap_or_default();
                ShopWithProducts { shop, products }
            })
            .collect())
    }

    // Public storefront listing.
    pub async fn list_all_with_products(&self) -> Result<Vec<ShopWithProducts>, AppError> {
        let shops = self.shop_repo.list_all().await?;
        self.embed_products(shops).await
    }

    // The caller's own shops.
    pub async fn list_owned_with_products(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<ShopWithProducts>, AppError> {
        let shops = self.shop_repo.list_by_owner(owner_id).await?;
        self.embed_products(shops).await
    }

    pub async fn get_with_products(&self, id: Uuid) -> Result<ShopWithProducts, AppError> {
        let shop = self
            .shop_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Shop"))?;
        let products = self.product_repo.list_by_shop(shop.id).await?;
        Ok(ShopWithProducts { shop, products })
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        description: &str,
        location: &str,
    ) -> Result<Shop, AppError> {
        self.shop_repo
            .create(name, description, location, owner_id)
            .await
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        location: Option<&str>,
    ) -> Result<Shop, AppError> {
        let shop = self
            .shop_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Shop"))?;
        ensure_owner(actor_id, &shop)?;

        self.shop_repo
            .update(id, name, description, location)
            .await
    }

    // Deletes the shop and all of its products in one transaction, so no
    // orphaned products survive a partial failure.
    pub async fn delete(&self, actor_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let shop = self
            .shop_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Shop"))?;
        ensure_owner(actor_id, &shop)?;

        let mut tx = self.pool.begin().await?;
        let removed = self.product_repo.delete_by_shop(&mut *tx, id).await?;
        self.shop_repo.delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!("shop {} deleted along with {} products", id, removed);
        Ok(())
    }
}
