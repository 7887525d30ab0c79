use crate::shared::decimal::opt_decimal;
use serde::{Deserialize, Serialize};

fn puntaje_valido(valor: i64, etiqueta: &str) -> Result<(), String> {
    if !(1..=5).contains(&valor) {
        return Err(format!("{} debe estar entre 1 y 5", etiqueta));
    }
    Ok(())
}

/// Payload de POST /api/calificaciones/tecnicos.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalificacionTecnicoDto {
    pub tecnico_id_tecnico: i64,
    pub puntaje: i64,
    pub comentario: String,
    pub incidente_idincidente: i64,
}

impl CalificacionTecnicoDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.tecnico_id_tecnico <= 0 {
            return Err("Debe seleccionar un técnico".into());
        }
        puntaje_valido(self.puntaje, "El puntaje")?;
        if self.incidente_idincidente <= 0 {
            return Err("La calificación debe asociarse a un incidente resuelto".into());
        }
        Ok(())
    }
}

/// Payload de POST /api/calificaciones/proveedores. Cuatro ejes de 1 a 5.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalificacionProveedorDto {
    pub proveedor_id_proveedor: i64,
    pub servicio_postventa: i64,
    pub precios: i64,
    pub tiempos_entrega: i64,
    pub calidad_productos: i64,
    pub comentario: String,
    pub incidente_idincidente: i64,
}

impl CalificacionProveedorDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.proveedor_id_proveedor <= 0 {
            return Err("Debe seleccionar un proveedor".into());
        }
        puntaje_valido(self.servicio_postventa, "El servicio post-venta")?;
        puntaje_valido(self.precios, "Precios")?;
        puntaje_valido(self.tiempos_entrega, "Tiempos de entrega")?;
        puntaje_valido(self.calidad_productos, "Calidad de productos")?;
        if self.incidente_idincidente <= 0 {
            return Err("No hay incidentes resueltos disponibles para calificar".into());
        }
        Ok(())
    }
}

/// Fila de GET /api/calificaciones/tecnicos/resumen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenTecnico {
    #[serde(default)]
    pub id_tecnico: Option<i64>,
    pub tecnico_nombre: String,
    #[serde(default)]
    pub total_calificaciones: Option<i64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_calificacion: Option<f64>,
    #[serde(default)]
    pub calificaciones_5_estrellas: Option<i64>,
}

/// Fila de GET /api/calificaciones/proveedores/resumen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenProveedor {
    pub id_proveedor: i64,
    pub proveedor_nombre: String,
    #[serde(default)]
    pub estado_proveedor: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_servicio: Option<f64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_precios: Option<f64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_tiempos: Option<f64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_calidad: Option<f64>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub promedio_general: Option<f64>,
}

impl ResumenProveedor {
    pub fn esta_inactivo(&self) -> bool {
        self.estado_proveedor.as_deref() == Some("Inactivo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puntaje_tecnico_en_rango() {
        let mut dto = CalificacionTecnicoDto {
            tecnico_id_tecnico: 1,
            puntaje: 5,
            comentario: String::new(),
            incidente_idincidente: 7,
        };
        assert!(dto.validate().is_ok());
        dto.puntaje = 0;
        assert!(dto.validate().is_err());
        dto.puntaje = 6;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn proveedor_exige_los_cuatro_ejes() {
        let mut dto = CalificacionProveedorDto {
            proveedor_id_proveedor: 2,
            servicio_postventa: 4,
            precios: 3,
            tiempos_entrega: 5,
            calidad_productos: 4,
            comentario: "Muy buen servicio".into(),
            incidente_idincidente: 7,
        };
        assert!(dto.validate().is_ok());
        dto.tiempos_entrega = 0;
        assert_eq!(
            dto.validate(),
            Err("Tiempos de entrega debe estar entre 1 y 5".to_string())
        );
    }

    #[test]
    fn resumen_acepta_promedios_como_texto() {
        let fila: ResumenProveedor = serde_json::from_value(serde_json::json!({
            "id_proveedor": 3,
            "proveedor_nombre": "ACME",
            "promedio_servicio": "4.50",
            "promedio_precios": 3.0,
            "promedio_general": "3.9000"
        }))
        .unwrap();
        assert_eq!(fila.promedio_servicio, Some(4.5));
        assert_eq!(fila.promedio_precios, Some(3.0));
        assert_eq!(fila.promedio_general, Some(3.9));
        assert_eq!(fila.promedio_calidad, None);
    }

    #[test]
    fn resumen_tolera_promedios_ausentes() {
        let fila: ResumenTecnico = serde_json::from_value(serde_json::json!({
            "tecnico_nombre": "María Gómez"
        }))
        .unwrap();
        assert_eq!(fila.total_calificaciones, None);
        assert_eq!(fila.promedio_calificacion, None);
    }
}
