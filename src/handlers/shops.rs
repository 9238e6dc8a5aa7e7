// src/handlers/shops.rs

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
    models::shop::{CreateShopPayload, UpdateShopPayload},
};

// Public: every shop with its products embedded.
pub async fn list_shops_with_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let shops = app_state.shop_service.list_all_with_products().await?;
    Ok(Json(shops))
}

// Public: one shop with its products.
pub async fn get_shop(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let shop = app_state.shop_service.get_with_products(id).await?;
    Ok(Json(shop))
}

// The caller's own shops.
pub async fn list_my_shops(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let shops = app_state
        .shop_service
        .list_owned_with_products(user.id)
        .await?;
    Ok(Json(shops))
}

pub async fn create_shop(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateShopPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let shop = app_state
        .shop_service
        .create(user.id, &payload.name, &payload.description, &payload.location)
        .await?;

    Ok((StatusCode::CREATED, Json(shop)))
}

pub async fn update_shop(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateShopPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let shop = app_state
        .shop_service
        .update(
            user.id,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            payload.location.as_deref(),
        )
        .await?;

    Ok(Json(shop))
}

pub async fn delete_shop(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.shop_service.delete(user.id, id).await?;
    Ok(Json(json!({ "message": "Deleted" })))
}
