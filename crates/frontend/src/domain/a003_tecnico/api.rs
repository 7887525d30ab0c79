use contracts::domain::a003_tecnico::aggregate::{Tecnico, TecnicoDto, TecnicoFiltro};

use crate::shared::api_utils;

/// GET /api/tecnicos with optional nombre/especialidad filters
pub async fn fetch_all(filtro: &TecnicoFiltro) -> Result<Vec<Tecnico>, String> {
    let mut params = Vec::new();
    if !filtro.nombre.trim().is_empty() {
        params.push(format!("nombre={}", urlencoding::encode(filtro.nombre.trim())));
    }
    if !filtro.especialidad.trim().is_empty() {
        params.push(format!(
            "especialidad={}",
            urlencoding::encode(filtro.especialidad.trim())
        ));
    }

    let path = if params.is_empty() {
        "/api/tecnicos".to_string()
    } else {
        format!("/api/tecnicos?{}", params.join("&"))
    };
    api_utils::get_json(&path).await
}

pub async fn fetch_by_id(id: i64) -> Result<Tecnico, String> {
    api_utils::get_json(&format!("/api/tecnicos/{}", id)).await
}

pub async fn create(dto: &TecnicoDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::post_json("/api/tecnicos", dto).await?;
    Ok(())
}

pub async fn update(id: i64, dto: &TecnicoDto) -> Result<(), String> {
    let _: serde_json::Value = api_utils::put_json(&format!("/api/tecnicos/{}", id), dto).await?;
    Ok(())
}

pub async fn remove(id: i64) -> Result<(), String> {
    api_utils::delete_json(&format!("/api/tecnicos/{}", id)).await
}
