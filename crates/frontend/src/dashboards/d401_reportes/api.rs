use contracts::dashboards::d401_reportes::dto::{
    DesempenoTecnico, FiltroGarantia, ProductosGarantiaResponse, RankingProveedor,
};

use crate::shared::api_utils;

pub async fn fetch_garantias(filtro: FiltroGarantia) -> Result<ProductosGarantiaResponse, String> {
    api_utils::get_json(&format!(
        "/api/reportes/productos/garantias?estado={}",
        filtro.as_param()
    ))
    .await
}

pub async fn fetch_ranking_proveedores(limit: usize) -> Result<Vec<RankingProveedor>, String> {
    api_utils::get_json(&format!("/api/reportes/ranking-proveedores?limit={}", limit)).await
}

pub async fn fetch_desempeno_tecnicos() -> Result<Vec<DesempenoTecnico>, String> {
    api_utils::get_json("/api/reportes/tecnicos/desempeno").await
}
