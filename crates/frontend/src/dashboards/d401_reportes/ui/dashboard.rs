use crate::dashboards::d401_reportes::api;
use crate::shared::date_utils::format_avg;
use crate::shared::icons::icon;
use contracts::dashboards::d401_reportes::dto::{
    DesempenoTecnico, FiltroGarantia, ProductoGarantia, RankingProveedor,
};
use leptos::prelude::*;

const RANKING_LIMIT: usize = 10;

const FILTROS_GARANTIA: [FiltroGarantia; 4] = [
    FiltroGarantia::Todos,
    FiltroGarantia::Vencida,
    FiltroGarantia::PorVencer,
    FiltroGarantia::Vigente,
];

/// Reportes operativos: garantías por estado, ranking de proveedores y
/// desempeño de técnicos.
#[component]
pub fn ReportesPage() -> impl IntoView {
    let (filtro, set_filtro) = signal(FiltroGarantia::PorVencer);
    let (garantias, set_garantias) = signal::<Vec<ProductoGarantia>>(Vec::new());
    let (ranking, set_ranking) = signal::<Vec<RankingProveedor>>(Vec::new());
    let (desempeno, set_desempeno) = signal::<Vec<DesempenoTecnico>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch_garantias = move || {
        let f = filtro.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_garantias(f).await {
                Ok(r) => set_garantias.set(r.productos),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Ranking y desempeño no dependen del filtro, se cargan una vez.
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_ranking_proveedores(RANKING_LIMIT).await {
            Ok(r) => set_ranking.set(r),
            Err(e) => set_error.set(Some(e)),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_desempeno_tecnicos().await {
            Ok(r) => set_desempeno.set(r),
            Err(e) => set_error.set(Some(e)),
        }
    });
    fetch_garantias();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Reportes"}</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="panel">
                <h3>{icon("package")} {"Garantías de equipos"}</h3>
                <div class="filter-bar">
                    {FILTROS_GARANTIA.into_iter().map(|f| {
                        view! {
                            <button
                                class="button button--filter"
                                class:button--active=move || filtro.get() == f
                                on:click=move |_| {
                                    set_filtro.set(f);
                                    fetch_garantias();
                                }
                            >
                                {f.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Marca"}</th>
                            <th class="table__header-cell">{"Modelo"}</th>
                            <th class="table__header-cell">{"N° de serie"}</th>
                            <th class="table__header-cell">{"Proveedor"}</th>
                            <th class="table__header-cell">{"Garantía"}</th>
                            <th class="table__header-cell">{"Días restantes"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || garantias.get().into_iter().map(|p| {
                            let vencida = p.vencida();
                            let por_vencer = p.por_vencer();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--danger=vencida
                                    class:table__row--warning=por_vencer
                                >
                                    <td class="table__cell">{p.marca.clone()}</td>
                                    <td class="table__cell">{p.modelo.clone()}</td>
                                    <td class="table__cell">{p.numero_de_serie.clone()}</td>
                                    <td class="table__cell">{p.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{p.estado_garantia.clone()}</td>
                                    <td class="table__cell">{p.dias_restantes}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                {move || garantias.get().is_empty().then(|| view! {
                    <p class="empty-hint">{"Sin equipos para el filtro seleccionado"}</p>
                })}
            </div>

            <div class="split-panel">
                <div class="panel">
                    <h3>{icon("star")} {"Ranking de proveedores"}</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"#"}</th>
                                <th class="table__header-cell">{"Proveedor"}</th>
                                <th class="table__header-cell">{"Promedio"}</th>
                                <th class="table__header-cell">{"Calificaciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || ranking.get().into_iter().enumerate().map(|(i, r)| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{i + 1}</td>
                                        <td class="table__cell">{r.proveedor_nombre.clone()}</td>
                                        <td class="table__cell">{format_avg(r.promedio_general)}</td>
                                        <td class="table__cell">{r.total_calificaciones.unwrap_or(0)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h3>{icon("wrench")} {"Desempeño de técnicos"}</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Técnico"}</th>
                                <th class="table__header-cell">{"Resueltos"}</th>
                                <th class="table__header-cell">{"Calificación"}</th>
                                <th class="table__header-cell">{"Resolución promedio (días)"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || desempeno.get().into_iter().map(|t| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{t.tecnico_nombre.clone()}</td>
                                        <td class="table__cell">{t.incidentes_resueltos.unwrap_or(0)}</td>
                                        <td class="table__cell">{format_avg(t.promedio_calificacion)}</td>
                                        <td class="table__cell">{format_avg(t.tiempo_promedio_resolucion)}</td>
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
