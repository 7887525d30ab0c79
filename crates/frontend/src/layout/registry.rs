//! Page registry: single source of truth mapping sidebar keys to views.

use crate::dashboards::d400_executive::ui::dashboard::ExecutiveDashboard;
use crate::dashboards::d401_reportes::ui::dashboard::ReportesPage;
use crate::domain::a001_proveedor::ui::list::ProveedorList;
use crate::domain::a002_producto::ui::list::ProductoList;
use crate::domain::a003_tecnico::ui::list::TecnicoList;
use crate::domain::a004_incidente::ui::list::IncidenteList;
use crate::domain::a005_orden_compra::ui::list::OrdenCompraList;
use crate::domain::a006_factura::ui::list::FacturaList;
use crate::domain::a007_calificacion::ui::page::CalificacionesPage;
use leptos::prelude::*;

/// Renders the page for a sidebar key, or a placeholder for unknown keys.
pub fn render_page(key: &str) -> AnyView {
    match key {
        "d400_executive" => view! { <ExecutiveDashboard /> }.into_any(),
        "d401_reportes" => view! { <ReportesPage /> }.into_any(),
        "a001_proveedor" => view! { <ProveedorList /> }.into_any(),
        "a002_producto" => view! { <ProductoList /> }.into_any(),
        "a003_tecnico" => view! { <TecnicoList /> }.into_any(),
        "a004_incidente" => view! { <IncidenteList /> }.into_any(),
        "a005_orden_compra" => view! { <OrdenCompraList /> }.into_any(),
        "a006_factura" => view! { <FacturaList /> }.into_any(),
        "a007_calificacion" => view! { <CalificacionesPage /> }.into_any(),
        unknown => {
            log::error!("unknown page key: {}", unknown);
            view! {
                <div style="padding: 24px;">
                    <p>"Página no encontrada"</p>
                </div>
            }
            .into_any()
        }
    }
}
