// src/db/shop_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::shop::Shop};

const SHOP_COLUMNS: &str = "id, name, description, location, owner_id, created_at, updated_at";

// All interactions with the 'shops' table.
#[derive(Clone)]
pub struct ShopRepository {
    pool: PgPool,
}

impl ShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        location: &str,
        owner_id: Uuid,
    ) -> Result<Shop, AppError> {
        let shop = sqlx::query_as::<_, Shop>(&format!(
            "INSERT INTO shops (name, description, location, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {SHOP_COLUMNS}"
        ))
        .bind(name)
        .bind(description)
        .bind(location)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(shop)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, AppError> {
        let maybe_shop = sqlx::query_as::<_, Shop>(&format!(
            "SELECT {SHOP_COLUMNS} FROM shops WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_shop)
    }

    pub async fn list_all(&self) -> Result<Vec<Shop>, AppError> {
        let shops = sqlx::query_as::<_, Shop>(&format!(
            "SELECT {SHOP_COLUMNS} FROM shops ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(shops)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Shop>, AppError> {
        let shops = sqlx::query_as::<_, Shop>(&format!(
            "SELECT {SHOP_COLUMNS} FROM shops WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shops)
    }

    // Partial update; absent fields keep their current value. The owner
    // column is never touched.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        location: Option<&str>,
    ) -> Result<Shop, AppError> {
        let shop = sqlx::query_as::<_, Shop>(&format!(
            "UPDATE shops
             SET name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 location = COALESCE($4, location),
                 updated_at = now()
             WHERE id = $1
             RETURNING {SHOP_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(shop)
    }

    // Takes an executor so the caller can run it inside the same transaction
    // that removes the shop's products.
    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM shops WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
