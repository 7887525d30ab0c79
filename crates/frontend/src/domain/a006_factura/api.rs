use contracts::domain::a006_factura::aggregate::{Factura, FacturaDetalle, FacturaDto, PagoCuotaDto};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Factura>, String> {
    api_utils::get_json("/api/facturas").await
}

pub async fn fetch_detalle(id: i64) -> Result<FacturaDetalle, String> {
    api_utils::get_json(&format!("/api/facturas/{}", id)).await
}

pub async fn create(dto: &FacturaDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/facturas", dto).await?;
    Ok(())
}

/// Registra el pago de una cuota del plan.
pub async fn pagar_cuota(id_plan_pago: i64, dto: &PagoCuotaDto) -> Result<(), String> {
    let _: serde_json::Value =
        api_utils::put_json(&format!("/api/facturas/cuotas/{}/pagar", id_plan_pago), dto).await?;
    Ok(())
}
