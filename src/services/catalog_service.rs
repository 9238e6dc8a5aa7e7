// src/services/catalog_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, ownership::ensure_owner},
    db::{ProductRepository, ShopRepository},
    models::product::Product,
};

// Product CRUD. Every mutation resolves the parent shop and gates on its
// owner; products have no owner field of their own.
#[derive(Clone)]
pub struct CatalogService {
    product_repo: ProductRepository,
    shop_repo: ShopRepository,
}

impl CatalogService {
    pub fn new(product_repo: ProductRepository, shop_repo: ShopRepository) -> Self {
        Self {
            product_repo,
            shop_repo,
        }
    }

    async fn owned_parent_shop(&self, actor_id: Uuid, shop_id: Uuid) -> Result<(), AppError> {
        let shop = self
            .shop_repo
            .find_by_id(shop_id)
            .await?
            .ok_or(AppError::NotFound("Shop"))?;
        ensure_owner(actor_id, &shop)
    }

    pub async fn create(
        &self,
        actor_id: Uuid,
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        photo: &str,
        shop_id: Uuid,
    ) -> Result<Product, AppError> {
        self.owned_parent_shop(actor_id, shop_id).await?;
        self.product_repo
            .create(name, description, price, stock, photo, shop_id)
            .await
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<Decimal>,
        stock: Option<i32>,
        photo: Option<&str>,
    ) -> Result<Product, AppError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Product"))?;
        self.owned_parent_shop(actor_id, product.shop_id).await?;

        self.product_repo
            .update(id, name, description, price, stock, photo)
            .await
    }

    pub async fn delete(&self, actor_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Product"))?;
        self.owned_parent_shop(actor_id, product.shop_id).await?;

        self.product_repo.delete(id).await
    }
}
