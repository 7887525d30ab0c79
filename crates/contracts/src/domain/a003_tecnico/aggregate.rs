use crate::shared::validation::{is_valid_email, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tecnico {
    pub id_tecnico: i64,
    pub nombre: String,
    pub documento: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub especialidad: String,
    #[serde(default)]
    pub vigencia_desde: Option<String>,
    #[serde(default)]
    pub vigencia_hasta: Option<String>,
    #[serde(default)]
    pub proveedor_id_proveedor: Option<i64>,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
}

/// Payload de alta/modificación de técnico. Las fechas viajan como ISO yyyy-MM-dd.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TecnicoDto {
    pub nombre: String,
    pub documento: String,
    pub email: String,
    pub telefono: String,
    pub especialidad: String,
    pub vigencia_desde: String,
    pub vigencia_hasta: String,
    pub proveedor_id_proveedor: i64,
}

impl TecnicoDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(2)
            .validate_string("El nombre", &self.nombre)?;
        ValidationRules::required()
            .with_min_length(7)
            .validate_string("El documento", &self.documento)?;
        if !is_valid_email(&self.email) {
            return Err("Email inválido".into());
        }
        ValidationRules::required().validate_string("El teléfono", &self.telefono)?;
        ValidationRules::required()
            .with_min_length(3)
            .validate_string("La especialidad", &self.especialidad)?;
        ValidationRules::required()
            .validate_string("La vigencia desde", &self.vigencia_desde)?;
        ValidationRules::required()
            .validate_string("La vigencia hasta", &self.vigencia_hasta)?;
        // ISO strings compare in calendar order
        if self.vigencia_desde > self.vigencia_hasta {
            return Err("La vigencia desde no puede ser posterior a la vigencia hasta".into());
        }
        if self.proveedor_id_proveedor <= 0 {
            return Err("Debe seleccionar un proveedor".into());
        }
        Ok(())
    }
}

/// Filtro de búsqueda servido por GET /api/tecnicos.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TecnicoFiltro {
    pub nombre: String,
    pub especialidad: String,
}

impl TecnicoFiltro {
    pub fn is_empty(&self) -> bool {
        self.nombre.trim().is_empty() && self.especialidad.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> TecnicoDto {
        TecnicoDto {
            nombre: "María Gómez".into(),
            documento: "30123456".into(),
            email: "mgomez@serviciotec.com".into(),
            telefono: "011-4000-1234".into(),
            especialidad: "Notebooks".into(),
            vigencia_desde: "2026-01-01".into(),
            vigencia_hasta: "2026-12-31".into(),
            proveedor_id_proveedor: 2,
        }
    }

    #[test]
    fn alta_valida() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn rechaza_vigencia_invertida() {
        let mut d = dto();
        d.vigencia_desde = "2027-01-01".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn rechaza_documento_corto() {
        let mut d = dto();
        d.documento = "123".into();
        assert_eq!(
            d.validate(),
            Err("El documento debe tener al menos 7 caracteres".to_string())
        );
    }
}
