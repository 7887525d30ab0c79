use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Cabecera de orden, fila de GET /api/ordenes-compra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenCompra {
    pub id_orden_compra: i64,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub monto_total: Option<f64>,
    #[serde(default)]
    pub cuotas: Option<i64>,
}

/// GET /api/ordenes-compra/:id devuelve la cabecera con sus líneas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenCompraDetalle {
    pub id_orden_compra: i64,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub cuotas: Option<i64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub items: Vec<LineaOrdenCompra>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaOrdenCompra {
    #[serde(default)]
    pub id_linea_orden_compra: Option<i64>,
    #[serde(default)]
    pub producto_id_producto: Option<i64>,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    pub cantidad: i64,
    pub precio_unitario: f64,
    #[serde(default)]
    pub subtotal: Option<f64>,
}

impl LineaOrdenCompra {
    /// Subtotal calculado por el backend; solo se deriva si la respuesta
    /// no lo trae.
    pub fn importe(&self) -> f64 {
        self.subtotal
            .unwrap_or(self.cantidad as f64 * self.precio_unitario)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaOrdenCompraDto {
    pub producto_id_producto: i64,
    pub cantidad: i64,
    pub precio_unitario: f64,
}

impl Default for LineaOrdenCompraDto {
    fn default() -> Self {
        Self {
            producto_id_producto: 0,
            cantidad: 1,
            precio_unitario: 0.0,
        }
    }
}

impl LineaOrdenCompraDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.producto_id_producto <= 0 {
            return Err("Seleccione un producto".into());
        }
        if self.cantidad < 1 {
            return Err("La cantidad debe ser al menos 1".into());
        }
        if self.precio_unitario <= 0.0 {
            return Err("El precio debe ser positivo".into());
        }
        Ok(())
    }
}

/// Payload de POST /api/ordenes-compra.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrdenCompraDto {
    pub proveedor_id_proveedor: i64,
    pub cuotas: i64,
    pub items: Vec<LineaOrdenCompraDto>,
}

impl OrdenCompraDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.proveedor_id_proveedor <= 0 {
            return Err("Seleccione un proveedor".into());
        }
        ValidationRules::default()
            .with_range(1.0, 12.0)
            .validate_number("Cuotas", self.cuotas as f64)?;
        if self.items.is_empty() {
            return Err("La orden debe tener al menos un ítem".into());
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> OrdenCompraDto {
        OrdenCompraDto {
            proveedor_id_proveedor: 5,
            cuotas: 3,
            items: vec![LineaOrdenCompraDto {
                producto_id_producto: 9,
                cantidad: 2,
                precio_unitario: 1500.0,
            }],
        }
    }

    #[test]
    fn orden_valida() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn orden_sin_items() {
        let mut d = dto();
        d.items.clear();
        assert_eq!(
            d.validate(),
            Err("La orden debe tener al menos un ítem".to_string())
        );
    }

    #[test]
    fn cuotas_fuera_de_rango() {
        let mut d = dto();
        d.cuotas = 13;
        assert!(d.validate().is_err());
        d.cuotas = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn item_invalido_corta_la_validacion() {
        let mut d = dto();
        d.items[0].precio_unitario = 0.0;
        assert_eq!(d.validate(), Err("El precio debe ser positivo".to_string()));
    }

    #[test]
    fn importe_respeta_el_subtotal_del_backend() {
        let linea: LineaOrdenCompra = serde_json::from_value(serde_json::json!({
            "cantidad": 2,
            "precio_unitario": 60.0,
            "subtotal": 100.0
        }))
        .unwrap();
        assert_eq!(linea.importe(), 100.0);
    }

    #[test]
    fn importe_se_deriva_si_falta_el_subtotal() {
        let linea: LineaOrdenCompra = serde_json::from_value(serde_json::json!({
            "cantidad": 3,
            "precio_unitario": 10.5
        }))
        .unwrap();
        assert_eq!(linea.importe(), 31.5);
    }
}
