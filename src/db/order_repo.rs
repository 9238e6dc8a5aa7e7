// src/db/order_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::PublicUser,
        order::{Order, OrderProductSummary, OrderStatus, ShopOrder},
    },
};

const ORDER_COLUMNS: &str = "id, product_id, buyer_id, quantity, total_price, status, \
                             shipping_address, customer_phone, created_at, updated_at";

// Flat row for the shop-orders listing; reassembled into `ShopOrder` below.
#[derive(sqlx::FromRow)]
struct ShopOrderRow {
    id: Uuid,
    product_id: Option<Uuid>,
    buyer_id: Uuid,
    quantity: i32,
    total_price: Decimal,
    status: OrderStatus,
    shipping_address: String,
    customer_phone: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_pk: Uuid,
    product_name: String,
    product_price: Decimal,
    product_shop_id: Uuid,
    buyer_name: String,
    buyer_email: String,
}

// All interactions with the 'orders' table.
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        product_id: Uuid,
        buyer_id: Uuid,
        quantity: i32,
        total_price: Decimal,
        shipping_address: &str,
        customer_phone: &str,
    ) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders (product_id, buyer_id, quantity, total_price,
                                 shipping_address, customer_phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(product_id)
        .bind(buyer_id)
        .bind(quantity)
        .bind(total_price)
        .bind(shipping_address)
        .bind(customer_phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let maybe_order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_order)
    }

    pub async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    // Orders whose product belongs to the given shop, newest first, with the
    // product and buyer summaries joined in. Orders whose product was since
    // deleted (product_id gone null) drop out of the inner join, matching the
    // old behavior of filtering out dangling references.
    pub async fn list_for_shop(&self, shop_id: Uuid) -> Result<Vec<ShopOrder>, AppError> {
        let rows = sqlx::query_as::<_, ShopOrderRow>(
            "SELECT o.id, o.product_id, o.buyer_id, o.quantity, o.total_price, o.status,
                    o.shipping_address, o.customer_phone, o.created_at, o.updated_at,
                    p.id AS product_pk,
                    p.name AS product_name, p.price AS product_price, p.shop_id AS product_shop_id,
                    u.name AS buyer_name, u.email AS buyer_email
             FROM orders o
             JOIN products p ON p.id = o.product_id
             JOIN users u ON u.id = o.buyer_id
             WHERE p.shop_id = $1
             ORDER BY o.created_at DESC",
        )
        .bind(shop_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ShopOrder::from_row).collect())
    }
}

impl ShopOrder {
    fn from_row(row: ShopOrderRow) -> Self {
        let product = OrderProductSummary {
            // p.id from the join, never null, unlike the order's nullable column
            id: row.product_pk,
            name: row.product_name,
            price: row.product_price,
            shop_id: row.product_shop_id,
        };
        let buyer = PublicUser {
            id: row.buyer_id,
            name: row.buyer_name,
            email: row.buyer_email,
        };
        ShopOrder {
            order: Order {
                id: row.id,
                product_id: row.product_id,
                buyer_id: row.buyer_id,
                quantity: row.quantity,
                total_price: row.total_price,
                status: row.status,
                shipping_address: row.shipping_address,
                customer_phone: row.customer_phone,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            product,
            buyer,
        }
    }
}
