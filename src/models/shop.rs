// src/models/shop.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::ownership::Owned;
use crate::models::product::Product;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Shop {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

// A shop with its products embedded, as the listing endpoints return it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopWithProducts {
    #[serde(flatten)]
    pub shop: Shop,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateShopPayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

// Partial update; the owner is immutable and has no field here.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateShopPayload {
    #[validate(length(min = 1, message = "Name cannot be empty."))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}
