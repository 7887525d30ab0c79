//! Payloads de GET /api/dashboard y GET /api/alertas/*.
//!
//! Todos los indicadores llegan calculados del backend; el cliente solo
//! los muestra.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Indicador precalculado. El backend a veces devuelve números y a veces
/// texto ya formateado ("2.5 hs"), por eso se aceptan ambos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metrica {
    Numero(f64),
    Texto(String),
}

impl Default for Metrica {
    fn default() -> Self {
        Metrica::Texto(String::new())
    }
}

impl fmt::Display for Metrica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metrica::Numero(n) => write!(f, "{}", n),
            Metrica::Texto(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporteEjecutivo {
    pub kpis_generales: KpisGenerales,
    pub kpis_financieros: KpisFinancieros,
    pub kpis_servicio: KpisServicio,
    pub kpis_desempeno: KpisDesempeno,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpisGenerales {
    #[serde(default)]
    pub proveedores_activos: i64,
    #[serde(default)]
    pub productos_registrados: i64,
    #[serde(default)]
    pub incidentes_abiertos: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpisFinancieros {
    #[serde(default)]
    pub cuotas_vencidas: i64,
    #[serde(default)]
    pub total_deuda_pendiente: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpisServicio {
    #[serde(default)]
    pub tiempo_respuesta_promedio: Metrica,
    #[serde(default)]
    pub tiempo_resolucion_promedio: Metrica,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpisDesempeno {
    #[serde(default)]
    pub calificacion_promedio_proveedores: Metrica,
    #[serde(default)]
    pub calificacion_promedio_tecnicos: Metrica,
}

/// GET /api/alertas/vencimientos?dias=N
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertasVencimientos {
    #[serde(default)]
    pub buscando_en_proximos_dias: i64,
    #[serde(default)]
    pub cantidad_alertas: i64,
    #[serde(default)]
    pub vencimientos: Vec<AlertaVencimiento>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertaVencimiento {
    pub id_plan_pago: i64,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    #[serde(default)]
    pub id_factura: Option<i64>,
    #[serde(default)]
    pub numero_cuota: Option<i64>,
    pub fecha_vencimiento: String,
    pub importe: f64,
}

/// GET /api/alertas/garantias?dias=N
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertasGarantias {
    #[serde(default)]
    pub buscando_en_proximos_dias: i64,
    #[serde(default)]
    pub cantidad_alertas: i64,
    #[serde(default)]
    pub garantias: Vec<crate::dashboards::d401_reportes::dto::ProductoGarantia>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrica_acepta_numero_o_texto() {
        let kpis: KpisServicio = serde_json::from_value(serde_json::json!({
            "tiempo_respuesta_promedio": 2.5,
            "tiempo_resolucion_promedio": "3 días"
        }))
        .unwrap();
        assert_eq!(kpis.tiempo_respuesta_promedio.to_string(), "2.5");
        assert_eq!(kpis.tiempo_resolucion_promedio.to_string(), "3 días");
    }

    #[test]
    fn alertas_sin_filas() {
        let alertas: AlertasVencimientos = serde_json::from_value(serde_json::json!({
            "buscando_en_proximos_dias": 30,
            "cantidad_alertas": 0
        }))
        .unwrap();
        assert!(alertas.vencimientos.is_empty());
    }
}
