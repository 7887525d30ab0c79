pub mod a001_proveedor;
pub mod a002_producto;
pub mod a003_tecnico;
pub mod a004_incidente;
pub mod a005_orden_compra;
pub mod a006_factura;
pub mod a007_calificacion;
