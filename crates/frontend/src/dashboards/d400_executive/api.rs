use contracts::dashboards::d400_executive::dto::{
    AlertasGarantias, AlertasVencimientos, ReporteEjecutivo,
};

use crate::shared::api_utils;

pub async fn fetch_dashboard() -> Result<ReporteEjecutivo, String> {
    api_utils::get_json("/api/dashboard").await
}

pub async fn fetch_alertas_vencimientos(dias: i64) -> Result<AlertasVencimientos, String> {
    api_utils::get_json(&format!("/api/alertas/vencimientos?dias={}", dias)).await
}

pub async fn fetch_alertas_garantias(dias: i64) -> Result<AlertasGarantias, String> {
    api_utils::get_json(&format!("/api/alertas/garantias?dias={}", dias)).await
}
