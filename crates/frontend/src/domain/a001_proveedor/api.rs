use contracts::domain::a001_proveedor::aggregate::{Proveedor, ProveedorDto, ProveedorUpdateDto};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Proveedor>, String> {
    api_utils::get_json("/api/proveedores").await
}

pub async fn fetch_by_id(id: i64) -> Result<Proveedor, String> {
    api_utils::get_json(&format!("/api/proveedores/{}", id)).await
}

pub async fn create(dto: &ProveedorDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/proveedores", dto).await?;
    Ok(())
}

pub async fn update(id: i64, dto: &ProveedorUpdateDto) -> Result<(), String> {
    let _: serde_json::Value =
        api_utils::put_json(&format!("/api/proveedores/{}", id), dto).await?;
    Ok(())
}

pub async fn remove(id: i64) -> Result<(), String> {
    api_utils::delete_json(&format!("/api/proveedores/{}", id)).await
}
