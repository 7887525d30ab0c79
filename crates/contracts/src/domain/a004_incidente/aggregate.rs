use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Ciclo de vida de un incidente. El backend usa las etiquetas con espacio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoIncidente {
    Abierto,
    #[serde(rename = "En Progreso")]
    EnProgreso,
    Resuelto,
}

impl EstadoIncidente {
    pub fn label(&self) -> &'static str {
        match self {
            EstadoIncidente::Abierto => "Abierto",
            EstadoIncidente::EnProgreso => "En Progreso",
            EstadoIncidente::Resuelto => "Resuelto",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incidente {
    pub idincidente: i64,
    pub descripcion: String,
    pub estado: EstadoIncidente,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub tecnico_nombre: Option<String>,
    #[serde(default)]
    pub fecha_resolucion: Option<String>,
    /// 1 cuando el incidente resuelto ya tiene calificación de técnico.
    #[serde(default)]
    pub ya_calificado: Option<i64>,
}

impl Incidente {
    pub fn ya_calificado(&self) -> bool {
        self.ya_calificado == Some(1)
    }
}

/// Payload de POST /api/incidentes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IncidenteDto {
    pub descripcion: String,
    pub producto_id_producto: i64,
}

impl IncidenteDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(10)
            .validate_string("La descripción", &self.descripcion)?;
        if self.producto_id_producto <= 0 {
            return Err("Debe seleccionar un equipo".into());
        }
        Ok(())
    }
}

/// Payload de POST /api/incidentes/:id/asignar.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AsignarTecnicoRequest {
    pub tecnico_id_tecnico: i64,
}

impl AsignarTecnicoRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.tecnico_id_tecnico <= 0 {
            return Err("Debe seleccionar un técnico".into());
        }
        Ok(())
    }
}

/// Payload de POST /api/incidentes/:id/resolver.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverRequest {
    pub descripcion: String,
}

impl ResolverRequest {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(5)
            .validate_string("La descripción de la resolución", &self.descripcion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_con_espacio() {
        let inc: Incidente = serde_json::from_value(serde_json::json!({
            "idincidente": 12,
            "descripcion": "No enciende",
            "estado": "En Progreso"
        }))
        .unwrap();
        assert_eq!(inc.estado, EstadoIncidente::EnProgreso);
        assert_eq!(inc.estado.label(), "En Progreso");
        assert_eq!(
            serde_json::to_value(inc.estado).unwrap(),
            serde_json::json!("En Progreso")
        );
    }

    #[test]
    fn reporte_requiere_descripcion_larga() {
        let dto = IncidenteDto {
            descripcion: "corta".into(),
            producto_id_producto: 4,
        };
        assert!(dto.validate().is_err());

        let dto = IncidenteDto {
            descripcion: "La impresora atasca papel".into(),
            producto_id_producto: 4,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn resolver_requiere_detalle() {
        assert!(ResolverRequest {
            descripcion: "ok".into()
        }
        .validate()
        .is_err());
        assert!(ResolverRequest {
            descripcion: "Se reemplazó el fusor".into()
        }
        .validate()
        .is_ok());
    }
}
