// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::product::Product};

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock, photo, shop_id, created_at, updated_at";

// All interactions with the 'products' table.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        photo: &str,
        shop_id: Uuid,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, price, stock, photo, shop_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(photo)
        .bind(shop_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let maybe_product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_product)
    }

    pub async fn list_by_shop(&self, shop_id: Uuid) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE shop_id = $1 ORDER BY created_at DESC"
        ))
        .bind(shop_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    // One query for the "shops with embedded products" listings; the caller
    // groups the rows by shop in memory.
    pub async fn list_by_shops(&self, shop_ids: &[Uuid]) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE shop_id = ANY($1) ORDER BY created_at DESC"
        ))
        .bind(shop_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<Decimal>,
        stock: Option<i32>,
        photo: Option<&str>,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 price = COALESCE($4, price),
                 stock = COALESCE($5, stock),
                 photo = COALESCE($6, photo),
                 updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(photo)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    // Persists the stock taken by a purchase. Deliberately a bare UPDATE with
    // no surrounding transaction shared with the order insert (see the
    // purchase workflow).
    pub async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET stock = stock - $2, updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // Cascade half of shop deletion; runs on the caller's transaction.
    pub async fn delete_by_shop<'e, E>(&self, executor: E, shop_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM products WHERE shop_id = $1")
            .bind(shop_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
