use crate::dashboards::d400_executive::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use contracts::dashboards::d400_executive::dto::{
    AlertasGarantias, AlertasVencimientos, ReporteEjecutivo,
};
use leptos::prelude::*;

const DIAS_ALERTA: i64 = 30;

/// Panel ejecutivo: KPIs precalculados y alertas de vencimientos y
/// garantías a 30 días.
#[component]
pub fn ExecutiveDashboard() -> impl IntoView {
    let (reporte, set_reporte) = signal::<Option<ReporteEjecutivo>>(None);
    let (vencimientos, set_vencimientos) = signal::<Option<AlertasVencimientos>>(None);
    let (garantias, set_garantias) = signal::<Option<AlertasGarantias>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(r) => set_reporte.set(Some(r)),
                Err(e) => set_error.set(Some(e)),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_alertas_vencimientos(DIAS_ALERTA).await {
                Ok(a) => set_vencimientos.set(Some(a)),
                Err(e) => set_error.set(Some(e)),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_alertas_garantias(DIAS_ALERTA).await {
                Ok(a) => set_garantias.set(Some(a)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Panel ejecutivo"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Proveedores activos".to_string()
                    icon_name="building".to_string()
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_generales.proveedores_activos.to_string())
                    })
                />
                <StatCard
                    label="Equipos registrados".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_generales.productos_registrados.to_string())
                    })
                />
                <StatCard
                    label="Incidentes abiertos".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_generales.incidentes_abiertos.to_string())
                    })
                />
                <StatCard
                    label="Cuotas vencidas".to_string()
                    icon_name="wallet".to_string()
                    class="stat-card--warning"
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_financieros.cuotas_vencidas.to_string())
                    })
                    subtitle=Signal::derive(move || {
                        reporte.get().map(|r| {
                            format!("Deuda pendiente: {}", format_money(r.kpis_financieros.total_deuda_pendiente))
                        })
                    })
                />
                <StatCard
                    label="Tiempo de respuesta promedio".to_string()
                    icon_name="wrench".to_string()
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_servicio.tiempo_respuesta_promedio.to_string())
                    })
                    subtitle=Signal::derive(move || {
                        reporte.get().map(|r| {
                            format!("Resolución: {}", r.kpis_servicio.tiempo_resolucion_promedio)
                        })
                    })
                />
                <StatCard
                    label="Calificación de proveedores".to_string()
                    icon_name="star".to_string()
                    value=Signal::derive(move || {
                        reporte.get().map(|r| r.kpis_desempeno.calificacion_promedio_proveedores.to_string())
                    })
                    subtitle=Signal::derive(move || {
                        reporte.get().map(|r| {
                            format!("Técnicos: {}", r.kpis_desempeno.calificacion_promedio_tecnicos)
                        })
                    })
                />
            </div>

            <div class="split-panel">
                <div class="panel">
                    <h3>
                        {"Vencimientos próximos"}
                        {move || vencimientos.get().map(|a| format!(" ({} en {} días)", a.cantidad_alertas, a.buscando_en_proximos_dias)).unwrap_or_default()}
                    </h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Proveedor"}</th>
                                <th class="table__header-cell">{"Factura"}</th>
                                <th class="table__header-cell">{"Cuota"}</th>
                                <th class="table__header-cell">{"Vencimiento"}</th>
                                <th class="table__header-cell">{"Importe"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || vencimientos.get().map(|a| a.vencimientos).unwrap_or_default().into_iter().map(|v| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{v.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{v.id_factura.map(|f| format!("#{}", f)).unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{v.numero_cuota.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{format_date(&v.fecha_vencimiento)}</td>
                                        <td class="table__cell">{format_money(v.importe)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h3>
                        {"Garantías por vencer"}
                        {move || garantias.get().map(|a| format!(" ({} en {} días)", a.cantidad_alertas, a.buscando_en_proximos_dias)).unwrap_or_default()}
                    </h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Equipo"}</th>
                                <th class="table__header-cell">{"Proveedor"}</th>
                                <th class="table__header-cell">{"Estado"}</th>
                                <th class="table__header-cell">{"Días restantes"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || garantias.get().map(|a| a.garantias).unwrap_or_default().into_iter().map(|g| {
                                let equipo = format!("{} {} (SN: {})", g.marca, g.modelo, g.numero_de_serie);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{equipo}</td>
                                        <td class="table__cell">{g.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{g.estado_garantia.clone()}</td>
                                        <td class="table__cell">{g.dias_restantes}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
