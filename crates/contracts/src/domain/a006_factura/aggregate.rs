use crate::domain::a005_orden_compra::aggregate::{LineaOrdenCompra, LineaOrdenCompraDto};
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Cabecera de factura, fila de GET /api/facturas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factura {
    pub id_factura: i64,
    #[serde(default)]
    pub id_orden_compra: Option<i64>,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    #[serde(default)]
    pub monto_total: Option<f64>,
    #[serde(default)]
    pub cuotas: Option<i64>,
}

/// GET /api/facturas/:id: cabecera, líneas y plan de pago.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacturaDetalle {
    pub id_factura: i64,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub orden_compra_id_orden_compra: Option<i64>,
    #[serde(default)]
    pub items: Vec<LineaOrdenCompra>,
    #[serde(default)]
    pub plan_pago: Vec<Cuota>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoCuota {
    Pendiente,
    Pagado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuota {
    pub id_plan_pago: i64,
    #[serde(default)]
    pub numero_cuota: Option<i64>,
    pub fecha_vencimiento: String,
    pub importe: f64,
    pub estado: EstadoCuota,
    #[serde(default)]
    pub fecha_pago: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoPago {
    pub cantidad_cuotas: i64,
    pub primer_vencimiento: String,
}

impl Default for InfoPago {
    fn default() -> Self {
        Self {
            cantidad_cuotas: 1,
            primer_vencimiento: String::new(),
        }
    }
}

/// Payload de POST /api/facturas. Las líneas se copian de la orden elegida.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FacturaDto {
    pub orden_compra_id_orden_compra: i64,
    pub items: Vec<LineaOrdenCompraDto>,
    pub info_pago: InfoPago,
}

impl FacturaDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.orden_compra_id_orden_compra <= 0 {
            return Err("Seleccione una orden de compra".into());
        }
        if self.items.is_empty() {
            return Err("La orden seleccionada no tiene items. No se puede facturar".into());
        }
        ValidationRules::default()
            .with_range(1.0, 12.0)
            .validate_number("Cuotas", self.info_pago.cantidad_cuotas as f64)?;
        ValidationRules::required()
            .validate_string("El primer vencimiento", &self.info_pago.primer_vencimiento)?;
        Ok(())
    }
}

/// Métodos de pago que acepta el backend para una cuota.
pub const METODOS_PAGO: [&str; 4] = ["Transferencia", "Cheque", "Efectivo", "Tarjeta"];

/// Payload de PUT /api/facturas/cuotas/:id/pagar.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PagoCuotaDto {
    pub metodo_pago: String,
    pub fecha_pago: String,
    pub observaciones: String,
}

impl PagoCuotaDto {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string("El método de pago", &self.metodo_pago)?;
        if !METODOS_PAGO.contains(&self.metodo_pago.as_str()) {
            return Err("Seleccione un método de pago válido".into());
        }
        ValidationRules::required().validate_string("La fecha de pago", &self.fecha_pago)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> FacturaDto {
        FacturaDto {
            orden_compra_id_orden_compra: 8,
            items: vec![LineaOrdenCompraDto {
                producto_id_producto: 2,
                cantidad: 1,
                precio_unitario: 900.0,
            }],
            info_pago: InfoPago {
                cantidad_cuotas: 6,
                primer_vencimiento: "2026-09-01".into(),
            },
        }
    }

    #[test]
    fn factura_valida() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn factura_sin_items_no_se_envia() {
        let mut d = dto();
        d.items.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn cuotas_acotadas_a_doce() {
        let mut d = dto();
        d.info_pago.cantidad_cuotas = 13;
        assert!(d.validate().is_err());
    }

    #[test]
    fn plan_de_pago_deserializa() {
        let det: FacturaDetalle = serde_json::from_value(serde_json::json!({
            "id_factura": 3,
            "estado": "Pendiente",
            "plan_pago": [
                {
                    "id_plan_pago": 31,
                    "numero_cuota": 1,
                    "fecha_vencimiento": "2026-09-01",
                    "importe": 150.0,
                    "estado": "Pagado",
                    "fecha_pago": "2026-08-20"
                },
                {
                    "id_plan_pago": 32,
                    "numero_cuota": 2,
                    "fecha_vencimiento": "2026-10-01",
                    "importe": 150.0,
                    "estado": "Pendiente"
                }
            ]
        }))
        .unwrap();
        assert_eq!(det.plan_pago.len(), 2);
        assert_eq!(det.plan_pago[0].estado, EstadoCuota::Pagado);
        assert_eq!(det.plan_pago[1].estado, EstadoCuota::Pendiente);
        assert_eq!(det.plan_pago[1].fecha_pago, None);
    }

    #[test]
    fn pago_requiere_metodo_y_fecha() {
        let mut pago = PagoCuotaDto {
            metodo_pago: "Transferencia".into(),
            fecha_pago: "2026-08-26".into(),
            observaciones: String::new(),
        };
        assert!(pago.validate().is_ok());
        pago.metodo_pago.clear();
        assert!(pago.validate().is_err());
    }

    #[test]
    fn pago_acepta_todos_los_metodos_del_selector() {
        for metodo in METODOS_PAGO {
            let pago = PagoCuotaDto {
                metodo_pago: metodo.into(),
                fecha_pago: "2026-08-26".into(),
                observaciones: String::new(),
            };
            assert!(pago.validate().is_ok(), "método rechazado: {}", metodo);
        }
        let pago = PagoCuotaDto {
            metodo_pago: "Trueque".into(),
            fecha_pago: "2026-08-26".into(),
            observaciones: String::new(),
        };
        assert!(pago.validate().is_err());
    }
}
