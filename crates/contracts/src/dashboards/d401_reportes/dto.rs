//! Payloads de GET /api/reportes/*.

use crate::shared::decimal::opt_decimal;
use serde::{Deserialize, Serialize};

/// Filtro de estado de garantía aceptado por el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltroGarantia {
    Todos,
    Vencida,
    PorVencer,
    Vigente,
}

impl FiltroGarantia {
    pub fn as_param(&self) -> &'static str {
        match self {
            FiltroGarantia::Todos => "todos",
            FiltroGarantia::Vencida => "vencida",
            FiltroGarantia::PorVencer => "por_vencer",
            FiltroGarantia::Vigente => "vigente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FiltroGarantia::Todos => "Todos",
            FiltroGarantia::Vencida => "Vencidas",
            FiltroGarantia::PorVencer => "Por vencer",
            FiltroGarantia::Vigente => "Vigentes",
        }
    }
}

/// GET /api/reportes/productos/garantias?estado=...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductosGarantiaResponse {
    #[serde(default)]
    pub productos: Vec<ProductoGarantia>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoGarantia {
    pub id_producto: i64,
    pub marca: String,
    pub modelo: String,
    pub numero_de_serie: String,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    pub estado_garantia: String,
    pub dias_restantes: i64,
}

impl ProductoGarantia {
    pub fn vencida(&self) -> bool {
        self.estado_garantia.contains("Vencida")
    }

    pub fn por_vencer(&self) -> bool {
        self.estado_garantia.contains("Por Vencer")
    }
}

/// Fila de GET /api/reportes/ranking-proveedores?limit=N.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingProveedor {
    #[serde(default)]
    pub id_proveedor: Option<i64>,
    pub proveedor_nombre: String,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_general: Option<f64>,
    #[serde(default)]
    pub total_calificaciones: Option<i64>,
}

/// Fila de GET /api/reportes/tecnicos/desempeno.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesempenoTecnico {
    #[serde(default)]
    pub id_tecnico: Option<i64>,
    pub tecnico_nombre: String,
    #[serde(default)]
    pub incidentes_resueltos: Option<i64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_calificacion: Option<f64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub tiempo_promedio_resolucion: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtro_params() {
        assert_eq!(FiltroGarantia::PorVencer.as_param(), "por_vencer");
        assert_eq!(FiltroGarantia::Todos.as_param(), "todos");
    }

    #[test]
    fn ranking_acepta_promedio_como_texto() {
        let fila: RankingProveedor = serde_json::from_value(serde_json::json!({
            "proveedor_nombre": "ACME",
            "promedio_general": "4.75",
            "total_calificaciones": 12
        }))
        .unwrap();
        assert_eq!(fila.promedio_general, Some(4.75));

        let t: DesempenoTecnico = serde_json::from_value(serde_json::json!({
            "tecnico_nombre": "María Gómez",
            "promedio_calificacion": "4.00",
            "tiempo_promedio_resolucion": "2.3"
        }))
        .unwrap();
        assert_eq!(t.promedio_calificacion, Some(4.0));
        assert_eq!(t.tiempo_promedio_resolucion, Some(2.3));
    }

    #[test]
    fn garantia_estados() {
        let p: ProductoGarantia = serde_json::from_value(serde_json::json!({
            "id_producto": 4,
            "marca": "HP",
            "modelo": "LaserJet",
            "numero_de_serie": "X99",
            "estado_garantia": "Por Vencer (15 días)",
            "dias_restantes": 15
        }))
        .unwrap();
        assert!(p.por_vencer());
        assert!(!p.vencida());
    }
}
