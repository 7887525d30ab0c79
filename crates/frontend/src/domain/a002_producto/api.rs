use contracts::domain::a002_producto::aggregate::{Producto, ProductoDto};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Producto>, String> {
    api_utils::get_json("/api/productos").await
}

pub async fn fetch_by_id(id: i64) -> Result<Producto, String> {
    api_utils::get_json(&format!("/api/productos/{}", id)).await
}

pub async fn create(dto: &ProductoDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/productos", dto).await?;
    Ok(())
}

pub async fn update(id: i64, dto: &ProductoDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::put_json(&format!("/api/productos/{}", id), dto).await?;
    Ok(())
}

pub async fn remove(id: i64) -> Result<(), String> {
    api_utils::delete_json(&format!("/api/productos/{}", id)).await
}
