use contracts::domain::a007_calificacion::aggregate::{
    CalificacionProveedorDto, CalificacionTecnicoDto, ResumenProveedor, ResumenTecnico,
};

use crate::shared::api_utils;

pub async fn calificar_tecnico(dto: &CalificacionTecnicoDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/calificaciones/tecnicos", dto).await?;
    Ok(())
}

pub async fn calificar_proveedor(dto: &CalificacionProveedorDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/calificaciones/proveedores", dto).await?;
    Ok(())
}

pub async fn resumen_tecnicos() -> Result<Vec<ResumenTecnico>, String> {
    api_utils::get_json("/api/calificaciones/tecnicos/resumen").await
}

pub async fn resumen_proveedores() -> Result<Vec<ResumenProveedor>, String> {
    api_utils::get_json("/api/calificaciones/proveedores/resumen").await
}
