use serde::{Deserialize, Serialize};

/// Core product entity. `id` is assigned by the database and never changes;
/// the wire shape is exactly `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
}
