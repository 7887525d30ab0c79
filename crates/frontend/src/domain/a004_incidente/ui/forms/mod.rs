//! Formularios de los tres pasos del ciclo de vida: reportar, asignar
//! técnico y resolver.

use crate::domain::a002_producto;
use crate::domain::a003_tecnico;
use crate::domain::a004_incidente::api;
use crate::shared::icons::icon;
use contracts::domain::a002_producto::aggregate::Producto;
use contracts::domain::a003_tecnico::aggregate::{Tecnico, TecnicoFiltro};
use contracts::domain::a004_incidente::aggregate::{
    AsignarTecnicoRequest, IncidenteDto, ResolverRequest,
};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ReportarIncidenteForm(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let form = RwSignal::new(IncidenteDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let productos = RwSignal::new(Vec::<Producto>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match a002_producto::api::fetch_all().await {
            Ok(v) => productos.set(v),
            Err(e) => error.set(Some(format!("Error al cargar equipos: {}", e))),
        }
    });

    let is_valid = move || form.get().validate().is_ok();

    let save = {
        let on_saved = on_saved.clone();
        move || {
            let current = form.get();
            if let Err(e) = current.validate() {
                error.set(Some(e));
                return;
            }
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create(&current).await {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="producto">{"Equipo"}</label>
                    <select
                        id="producto"
                        prop:value=move || form.get().producto_id_producto.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.producto_id_producto = value);
                        }
                    >
                        <option value="0">{"Seleccionar equipo..."}</option>
                        {move || productos.get().into_iter().map(|p| {
                            let id = p.id_producto;
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().producto_id_producto == id
                                >
                                    {p.etiqueta()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="descripcion">{"Descripción"}</label>
                    <textarea
                        id="descripcion"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| {
                            form.update(|f| f.descripcion = event_target_value(&ev));
                        }
                        placeholder="Describa la falla (mínimo 10 caracteres)"
                        rows="4"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| save()
                    disabled=move || !is_valid()
                >
                    {icon("save")}
                    {"Reportar"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AsignarTecnicoForm(
    incidente_id: i64,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(AsignarTecnicoRequest::default());
    let error = RwSignal::new(Option::<String>::None);
    let tecnicos = RwSignal::new(Vec::<Tecnico>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match a003_tecnico::api::fetch_all(&TecnicoFiltro::default()).await {
            Ok(v) => tecnicos.set(v),
            Err(e) => error.set(Some(format!("Error al cargar técnicos: {}", e))),
        }
    });

    let is_valid = move || form.get().validate().is_ok();

    let save = {
        let on_saved = on_saved.clone();
        move || {
            let current = form.get();
            if let Err(e) = current.validate() {
                error.set(Some(e));
                return;
            }
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::asignar_tecnico(incidente_id, &current).await {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="tecnico">{"Técnico"}</label>
                    <select
                        id="tecnico"
                        prop:value=move || form.get().tecnico_id_tecnico.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.tecnico_id_tecnico = value);
                        }
                    >
                        <option value="0">{"Seleccionar técnico..."}</option>
                        {move || tecnicos.get().into_iter().map(|t| {
                            let id = t.id_tecnico;
                            let etiqueta = format!("{} ({})", t.nombre, t.especialidad);
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().tecnico_id_tecnico == id
                                >
                                    {etiqueta}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| save()
                    disabled=move || !is_valid()
                >
                    {icon("save")}
                    {"Asignar"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ResolverIncidenteForm(
    incidente_id: i64,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(ResolverRequest::default());
    let error = RwSignal::new(Option::<String>::None);

    let is_valid = move || form.get().validate().is_ok();

    let save = {
        let on_saved = on_saved.clone();
        move || {
            let current = form.get();
            if let Err(e) = current.validate() {
                error.set(Some(e));
                return;
            }
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::resolver(incidente_id, &current).await {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="resolucion">{"Detalle de la resolución"}</label>
                    <textarea
                        id="resolucion"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| {
                            form.update(|f| f.descripcion = event_target_value(&ev));
                        }
                        placeholder="Qué se hizo para resolver el incidente"
                        rows="4"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| save()
                    disabled=move || !is_valid()
                >
                    {icon("save")}
                    {"Resolver"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
