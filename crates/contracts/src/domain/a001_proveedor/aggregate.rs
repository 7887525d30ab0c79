use crate::shared::validation::{is_valid_cuit, is_valid_email, ValidationRules};
use serde::{Deserialize, Serialize};

/// Proveedor tal como lo devuelve el backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proveedor {
    pub id_proveedor: i64,
    pub razon_social: String,
    pub cuit: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

impl Proveedor {
    pub fn esta_inactivo(&self) -> bool {
        self.estado.as_deref() == Some("Inactivo")
    }
}

/// Payload de alta de proveedor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProveedorDto {
    pub razon_social: String,
    pub cuit: String,
    pub email: String,
    pub telefono: String,
}

impl ProveedorDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(3)
            .validate_string("La razón social", &self.razon_social)?;
        if !is_valid_cuit(&self.cuit) {
            return Err("El CUIT debe contener 11 dígitos".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Email inválido".into());
        }
        Ok(())
    }
}

/// Payload de modificación. El CUIT es inmutable y no viaja.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProveedorUpdateDto {
    pub razon_social: String,
    pub email: String,
    pub telefono: String,
}

impl ProveedorUpdateDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(3)
            .validate_string("La razón social", &self.razon_social)?;
        if !is_valid_email(&self.email) {
            return Err("Email inválido".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProveedorDto {
        ProveedorDto {
            razon_social: "Insumos del Sur SA".into(),
            cuit: "30-71234567-8".into(),
            email: "ventas@insumosdelsur.com".into(),
            telefono: "011-4555-0000".into(),
        }
    }

    #[test]
    fn alta_valida() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn alta_rechaza_cuit_corto() {
        let mut d = dto();
        d.cuit = "30-712345-8".into();
        assert_eq!(
            d.validate(),
            Err("El CUIT debe contener 11 dígitos".to_string())
        );
    }

    #[test]
    fn alta_rechaza_email_invalido() {
        let mut d = dto();
        d.email = "ventas-insumos".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn update_no_serializa_cuit() {
        let d = ProveedorUpdateDto {
            razon_social: "Insumos del Sur SA".into(),
            email: "ventas@insumosdelsur.com".into(),
            telefono: String::new(),
        };
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("cuit").is_none());
        assert_eq!(json["razon_social"], "Insumos del Sur SA");
    }

    #[test]
    fn proveedor_inactivo() {
        let p: Proveedor = serde_json::from_value(serde_json::json!({
            "id_proveedor": 7,
            "razon_social": "ACME",
            "cuit": "20304050607",
            "email": "a@b.co",
            "estado": "Inactivo"
        }))
        .unwrap();
        assert!(p.esta_inactivo());
        assert_eq!(p.telefono, None);
    }
}
