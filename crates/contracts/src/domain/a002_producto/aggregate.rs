use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Producto (equipo) registrado. La garantía la calcula el backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    pub id_producto: i64,
    pub marca: String,
    pub modelo: String,
    pub numero_de_serie: String,
    #[serde(default)]
    pub fecha_compra: Option<String>,
    #[serde(default)]
    pub garantia_meses: Option<i64>,
    #[serde(default)]
    pub proveedor_id_proveedor: Option<i64>,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
}

impl Producto {
    /// Etiqueta corta para selects: "Marca Modelo (SN: ...)".
    pub fn etiqueta(&self) -> String {
        format!("{} {} (SN: {})", self.marca, self.modelo, self.numero_de_serie)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductoDto {
    pub marca: String,
    pub modelo: String,
    pub numero_de_serie: String,
    pub fecha_compra: String,
    pub garantia_meses: i64,
    pub proveedor_id_proveedor: i64,
}

impl ProductoDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string("La marca", &self.marca)?;
        ValidationRules::required().validate_string("El modelo", &self.modelo)?;
        ValidationRules::required()
            .validate_string("El número de serie", &self.numero_de_serie)?;
        ValidationRules::required()
            .validate_string("La fecha de compra", &self.fecha_compra)?;
        if self.garantia_meses < 0 {
            return Err("La garantía no puede ser negativa".into());
        }
        if self.proveedor_id_proveedor <= 0 {
            return Err("Debe seleccionar un proveedor".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProductoDto {
        ProductoDto {
            marca: "Lenovo".into(),
            modelo: "ThinkPad T14".into(),
            numero_de_serie: "SN-4410".into(),
            fecha_compra: "2026-02-10".into(),
            garantia_meses: 24,
            proveedor_id_proveedor: 3,
        }
    }

    #[test]
    fn alta_valida() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn alta_requiere_proveedor() {
        let mut d = dto();
        d.proveedor_id_proveedor = 0;
        assert_eq!(d.validate(), Err("Debe seleccionar un proveedor".to_string()));
    }

    #[test]
    fn etiqueta_para_selects() {
        let p: Producto = serde_json::from_value(serde_json::json!({
            "id_producto": 1,
            "marca": "HP",
            "modelo": "LaserJet",
            "numero_de_serie": "X99"
        }))
        .unwrap();
        assert_eq!(p.etiqueta(), "HP LaserJet (SN: X99)");
    }
}
