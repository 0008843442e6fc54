use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info};

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateProduct, Product, UpdateProduct},
    AppState,
};

/// Malformed bodies (invalid JSON, missing or mistyped `name`) become a
/// plain 400 instead of the extractor's default rejection.
fn reject(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

fn require_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    Ok(())
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    // The one place a storage failure is caught and logged before surfacing.
    let products = db::fetch_all_products(&state.db).await.map_err(|err| {
        error!(error = %err, "Failed to list products");
        err
    })?;

    debug!(count = products.len(), "Listed products");

    Ok(Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = db::fetch_product_by_id(&state.db, id).await?;

    debug!(id, "Fetched product");

    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload.map_err(reject)?;
    require_name(&payload.name)?;

    let product = db::insert_product(&state.db, &payload).await?;

    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(payload) = payload.map_err(reject)?;
    require_name(&payload.name)?;

    let product = db::update_product(&state.db, id, &payload).await?;

    info!(id, name = %product.name, "Updated product");

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    db::delete_product(&state.db, id).await?;

    info!(id, "Deleted product");

    Ok(Json(serde_json::json!({
        "message": format!("Deleted Product with id {}", id),
    })))
}
