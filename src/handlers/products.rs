// src/handlers/products.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        order::BuyPayload,
        product::{CreateProductPayload, UpdateProductPayload},
    },
};

pub async fn create_product(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state
        .catalog_service
        .create(
            user.id,
            &payload.name,
            &payload.description,
            payload.price,
            payload.stock,
            &payload.photo,
            payload.shop_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state
        .catalog_service
        .update(
            user.id,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            payload.price,
            payload.stock,
            payload.photo.as_deref(),
        )
        .await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete(user.id, id).await?;
    Ok(Json(json!({ "message": "Deleted" })))
}

// The purchase workflow entry point.
pub async fn buy_product(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BuyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let order = app_state
        .order_service
        .purchase(
            user.id,
            id,
            payload.quantity,
            &payload.shipping_address,
            &payload.customer_phone,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}
