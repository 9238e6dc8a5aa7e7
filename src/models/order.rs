// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// The five lifecycle states. `delivered` and `cancelled` are terminal by
// convention; the server accepts any of the five on a status update and does
// not validate the transition graph (the forward-only ladder lives in the
// client's buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

// An order row. `product_id` goes null when the product (or its whole shop)
// is later deleted; the order itself is never removed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub buyer_id: Uuid,
    pub quantity: i32,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub customer_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// What the shop-orders listing embeds for each order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductSummary {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub shop_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrder {
    #[serde(flatten)]
    pub order: Order,
    pub product: OrderProductSummary,
    pub buyer: crate::models::auth::PublicUser,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuyPayload {
    #[validate(range(min = 1, message = "Quantity must be at least 1."))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub customer_phone: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateStatusPayload {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_as_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
        let back: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn status_payload_rejects_values_outside_the_lifecycle() {
        assert!(serde_json::from_str::<UpdateStatusPayload>(r#"{"status":"refunded"}"#).is_err());
        let ok: UpdateStatusPayload =
            serde_json::from_str(r#"{"status":"processing"}"#).unwrap();
        assert_eq!(ok.status, OrderStatus::Processing);
    }

    #[test]
    fn buy_payload_quantity_defaults_to_one() {
        let payload: BuyPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.quantity, 1);
        assert_eq!(payload.shipping_address, "");
    }

    #[test]
    fn buy_payload_rejects_zero_quantity() {
        let payload: BuyPayload = serde_json::from_str(r#"{"quantity":0}"#).unwrap();
        assert!(validator::Validate::validate(&payload).is_err());
    }
}
