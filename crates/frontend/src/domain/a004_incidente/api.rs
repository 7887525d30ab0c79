use contracts::domain::a004_incidente::aggregate::{
    AsignarTecnicoRequest, Incidente, IncidenteDto, ResolverRequest,
};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Incidente>, String> {
    api_utils::get_json("/api/incidentes").await
}

pub async fn create(dto: &IncidenteDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/incidentes", dto).await?;
    Ok(())
}

/// Asignar técnico pasa el incidente a "En Progreso".
pub async fn asignar_tecnico(id: i64, req: &AsignarTecnicoRequest) -> Result<(), String> {
    let _: serde_json::Value =
        api_utils::post_json(&format!("/api/incidentes/{}/asignar", id), req).await?;
    Ok(())
}

/// Resolver cierra el incidente y registra la fecha de resolución.
pub async fn resolver(id: i64, req: &ResolverRequest) -> Result<(), String> {
    let _: serde_json::Value =
        api_utils::post_json(&format!("/api/incidentes/{}/resolver", id), req).await?;
    Ok(())
}
