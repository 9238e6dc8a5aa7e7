// src/handlers/orders.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser,
    models::order::UpdateStatusPayload,
};

// Shop owner's order book for one shop.
pub async fn list_shop_orders(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(shop_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state
        .order_service
        .list_for_shop(user.id, shop_id)
        .await?;
    Ok(Json(orders))
}

// Status lifecycle transition; deserialization already restricts the value
// to one of the five states.
pub async fn update_order_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .update_status(user.id, id, payload.status)
        .await?;
    Ok(Json(order))
}
