use crate::domain::a001_proveedor;
use crate::domain::a003_tecnico;
use crate::domain::a004_incidente;
use crate::domain::a007_calificacion::api;
use crate::shared::date_utils::format_avg;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::domain::a003_tecnico::aggregate::{Tecnico, TecnicoFiltro};
use contracts::domain::a004_incidente::aggregate::{EstadoIncidente, Incidente};
use contracts::domain::a007_calificacion::aggregate::{
    CalificacionProveedorDto, CalificacionTecnicoDto, ResumenProveedor, ResumenTecnico,
};
use leptos::prelude::*;

/// Selector de puntaje de 1 a 5 estrellas.
#[component]
fn StarPicker(
    #[prop(into)] value: Signal<i64>,
    on_change: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="star-picker">
            {(1..=5).map(|n| {
                let filled = move || value.get() >= n;
                view! {
                    <button
                        class="star-picker__star"
                        class:star-picker__star--filled=filled
                        on:click=move |_| on_change.run(n)
                        title=format!("{} de 5", n)
                    >
                        {"★"}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Calificaciones: formularios de carga y tablas de resumen, en dos
/// solapas (técnicos y proveedores).
#[component]
pub fn CalificacionesPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("tecnicos".to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Calificaciones"}</h1>
                </div>
            </div>

            <div class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active_tab.get() == "tecnicos"
                    on:click=move |_| set_active_tab.set("tecnicos".to_string())
                >
                    {"Técnicos"}
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active_tab.get() == "proveedores"
                    on:click=move |_| set_active_tab.set("proveedores".to_string())
                >
                    {"Proveedores"}
                </button>
            </div>

            <Show
                when=move || active_tab.get() == "tecnicos"
                fallback=|| view! { <CalificacionProveedores /> }
            >
                <CalificacionTecnicos />
            </Show>
        </div>
    }
}

#[component]
fn CalificacionTecnicos() -> impl IntoView {
    let form = RwSignal::new(CalificacionTecnicoDto::default());
    let (tecnicos, set_tecnicos) = signal(Vec::<Tecnico>::new());
    let (incidentes, set_incidentes) = signal(Vec::<Incidente>::new());
    let (resumen, set_resumen) = signal(Vec::<ResumenTecnico>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let toast = use_toast();

    let fetch_resumen = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::resumen_tecnicos().await {
                Ok(v) => set_resumen.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match a003_tecnico::api::fetch_all(&TecnicoFiltro::default()).await {
            Ok(v) => set_tecnicos.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });
    // Solo se califican incidentes resueltos que aún no tienen calificación
    wasm_bindgen_futures::spawn_local(async move {
        match a004_incidente::api::fetch_all().await {
            Ok(v) => set_incidentes.set(
                v.into_iter()
                    .filter(|i| i.estado == EstadoIncidente::Resuelto && !i.ya_calificado())
                    .collect(),
            ),
            Err(e) => set_error.set(Some(e)),
        }
    });
    fetch_resumen();

    let guardar = move || {
        let current = form.get();
        if let Err(e) = current.validate() {
            toast.error(e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::calificar_tecnico(&current).await {
                Ok(()) => {
                    toast.success("Calificación registrada");
                    form.set(CalificacionTecnicoDto::default());
                    fetch_resumen();
                    // El incidente calificado deja de ser elegible
                    set_incidentes.update(|list| {
                        list.retain(|i| i.idincidente != current.incidente_idincidente)
                    });
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="split-panel">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="panel">
                <h3>{"Calificar técnico"}</h3>

                <div class="form-group">
                    <label for="cal_tecnico">{"Técnico"}</label>
                    <select
                        id="cal_tecnico"
                        prop:value=move || form.get().tecnico_id_tecnico.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.tecnico_id_tecnico = value);
                        }
                    >
                        <option value="0">{"Seleccionar técnico..."}</option>
                        {move || tecnicos.get().into_iter().map(|t| {
                            let id = t.id_tecnico;
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().tecnico_id_tecnico == id
                                >
                                    {t.nombre.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="cal_incidente">{"Incidente resuelto"}</label>
                    <select
                        id="cal_incidente"
                        prop:value=move || form.get().incidente_idincidente.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.incidente_idincidente = value);
                        }
                    >
                        <option value="0">{"Seleccionar incidente..."}</option>
                        {move || incidentes.get().into_iter().map(|i| {
                            let id = i.idincidente;
                            let etiqueta = format!("#{} - {}", id, i.descripcion);
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().incidente_idincidente == id
                                >
                                    {etiqueta}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Puntaje"}</label>
                    <StarPicker
                        value=Signal::derive(move || form.get().puntaje)
                        on_change=Callback::new(move |n| form.update(|f| f.puntaje = n))
                    />
                </div>

                <div class="form-group">
                    <label for="cal_comentario">{"Comentario"}</label>
                    <textarea
                        id="cal_comentario"
                        prop:value=move || form.get().comentario
                        on:input=move |ev| {
                            form.update(|f| f.comentario = event_target_value(&ev));
                        }
                        placeholder="Opcional"
                        rows="3"
                    />
                </div>

                <button
                    class="btn btn-primary"
                    on:click=move |_| guardar()
                    disabled=move || form.get().validate().is_err()
                >
                    {icon("save")}
                    {"Calificar"}
                </button>
            </div>

            <div class="panel">
                <h3>{"Resumen por técnico"}</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Técnico"}</th>
                            <th class="table__header-cell">{"Calificaciones"}</th>
                            <th class="table__header-cell">{"Promedio"}</th>
                            <th class="table__header-cell">{"5 estrellas"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || resumen.get().into_iter().map(|fila| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{fila.tecnico_nombre.clone()}</td>
                                    <td class="table__cell">{fila.total_calificaciones.unwrap_or(0)}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_calificacion)}</td>
                                    <td class="table__cell">{fila.calificaciones_5_estrellas.unwrap_or(0)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn CalificacionProveedores() -> impl IntoView {
    let form = RwSignal::new(CalificacionProveedorDto::default());
    let (proveedores, set_proveedores) = signal(Vec::<Proveedor>::new());
    let (resumen, set_resumen) = signal(Vec::<ResumenProveedor>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let toast = use_toast();

    let fetch_resumen = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::resumen_proveedores().await {
                Ok(v) => set_resumen.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match a001_proveedor::api::fetch_all().await {
            Ok(v) => set_proveedores.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });
    // El backend exige asociar la calificación a un incidente resuelto;
    // se toma el primero disponible.
    wasm_bindgen_futures::spawn_local(async move {
        match a004_incidente::api::fetch_all().await {
            Ok(v) => {
                if let Some(resuelto) = v.iter().find(|i| i.estado == EstadoIncidente::Resuelto) {
                    let id = resuelto.idincidente;
                    form.update(|f| f.incidente_idincidente = id);
                }
            }
            Err(e) => set_error.set(Some(e)),
        }
    });
    fetch_resumen();

    let guardar = move || {
        let current = form.get();
        if let Err(e) = current.validate() {
            toast.error(e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::calificar_proveedor(&current).await {
                Ok(()) => {
                    toast.success("Calificación registrada");
                    let incidente = current.incidente_idincidente;
                    form.set(CalificacionProveedorDto {
                        incidente_idincidente: incidente,
                        ..Default::default()
                    });
                    fetch_resumen();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let eje = move |label: &'static str, get: fn(&CalificacionProveedorDto) -> i64, set: fn(&mut CalificacionProveedorDto, i64)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <StarPicker
                    value=Signal::derive(move || get(&form.get()))
                    on_change=Callback::new(move |n| form.update(|f| set(f, n)))
                />
            </div>
        }
    };

    view! {
        <div class="split-panel">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="panel">
                <h3>{"Calificar proveedor"}</h3>

                <div class="form-group">
                    <label for="cal_proveedor">{"Proveedor"}</label>
                    <select
                        id="cal_proveedor"
                        prop:value=move || form.get().proveedor_id_proveedor.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.proveedor_id_proveedor = value);
                        }
                    >
                        <option value="0">{"Seleccionar proveedor..."}</option>
                        {move || proveedores.get().into_iter().map(|p| {
                            let id = p.id_proveedor;
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().proveedor_id_proveedor == id
                                >
                                    {p.razon_social.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                {eje("Servicio post-venta", |f| f.servicio_postventa, |f, n| f.servicio_postventa = n)}
                {eje("Precios", |f| f.precios, |f, n| f.precios = n)}
                {eje("Tiempos de entrega", |f| f.tiempos_entrega, |f, n| f.tiempos_entrega = n)}
                {eje("Calidad de productos", |f| f.calidad_productos, |f, n| f.calidad_productos = n)}

                <div class="form-group">
                    <label for="cal_prov_comentario">{"Comentario"}</label>
                    <textarea
                        id="cal_prov_comentario"
                        prop:value=move || form.get().comentario
                        on:input=move |ev| {
                            form.update(|f| f.comentario = event_target_value(&ev));
                        }
                        placeholder="Opcional"
                        rows="3"
                    />
                </div>

                <button
                    class="btn btn-primary"
                    on:click=move |_| guardar()
                    disabled=move || form.get().validate().is_err()
                >
                    {icon("save")}
                    {"Calificar"}
                </button>
            </div>

            <div class="panel">
                <h3>{"Resumen por proveedor"}</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Proveedor"}</th>
                            <th class="table__header-cell">{"Servicio"}</th>
                            <th class="table__header-cell">{"Precios"}</th>
                            <th class="table__header-cell">{"Tiempos"}</th>
                            <th class="table__header-cell">{"Calidad"}</th>
                            <th class="table__header-cell">{"General"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || resumen.get().into_iter().map(|fila| {
                            let inactivo = fila.esta_inactivo();
                            view! {
                                <tr class="table__row" class:table__row--inactive=inactivo>
                                    <td class="table__cell">{fila.proveedor_nombre.clone()}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_servicio)}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_precios)}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_tiempos)}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_calidad)}</td>
                                    <td class="table__cell">{format_avg(fila.promedio_general)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
