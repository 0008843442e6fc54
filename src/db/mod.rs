use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}

pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT id, name FROM products ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn fetch_product_by_id(pool: &PgPool, id: i32) -> AppResult<Product> {
    sqlx::query_as::<_, Product>("SELECT id, name FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn insert_product(pool: &PgPool, payload: &CreateProduct) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update_product(pool: &PgPool, id: i32, payload: &UpdateProduct) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&payload.name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

pub async fn delete_product(pool: &PgPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }
    Ok(())
}
