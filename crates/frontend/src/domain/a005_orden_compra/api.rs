use contracts::domain::a005_orden_compra::aggregate::{
    OrdenCompra, OrdenCompraDetalle, OrdenCompraDto,
};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<OrdenCompra>, String> {
    api_utils::get_json("/api/ordenes-compra").await
}

pub async fn fetch_detalle(id: i64) -> Result<OrdenCompraDetalle, String> {
    api_utils::get_json(&format!("/api/ordenes-compra/{}", id)).await
}

pub async fn create(dto: &OrdenCompraDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/ordenes-compra", dto).await?;
    Ok(())
}
