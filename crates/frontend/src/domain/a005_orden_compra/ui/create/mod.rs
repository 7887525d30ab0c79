use crate::domain::a001_proveedor;
use crate::domain::a002_producto;
use crate::domain::a005_orden_compra::api;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::domain::a002_producto::aggregate::Producto;
use contracts::domain::a005_orden_compra::aggregate::{LineaOrdenCompraDto, OrdenCompraDto};
use leptos::prelude::*;
use std::rc::Rc;

/// Formulario de alta de orden de compra con líneas dinámicas.
#[component]
pub fn OrdenCompraCreate(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let form = RwSignal::new(OrdenCompraDto {
        proveedor_id_proveedor: 0,
        cuotas: 1,
        items: vec![LineaOrdenCompraDto::default()],
    });
    let error = RwSignal::new(Option::<String>::None);
    let proveedores = RwSignal::new(Vec::<Proveedor>::new());
    let productos = RwSignal::new(Vec::<Producto>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match a001_proveedor::api::fetch_all().await {
            Ok(v) => proveedores.set(v),
            Err(e) => error.set(Some(format!("Error al cargar proveedores: {}", e))),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match a002_producto::api::fetch_all().await {
            Ok(v) => productos.set(v),
            Err(e) => error.set(Some(format!("Error al cargar equipos: {}", e))),
        }
    });

    let is_valid = move || form.get().validate().is_ok();

    let total = move || {
        form.get()
            .items
            .iter()
            .map(|i| i.cantidad as f64 * i.precio_unitario)
            .sum::<f64>()
    };

    let add_item = move || {
        form.update(|f| f.items.push(LineaOrdenCompraDto::default()));
    };

    let remove_item = move |index: usize| {
        form.update(|f| {
            if f.items.len() > 1 {
                f.items.remove(index);
            }
        });
    };

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
                <div class="form-row">
                    <div class="form-group">
                        <label for="proveedor">{"Proveedor"}</label>
                        <select
                            id="proveedor"
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

                    <div class="form-group">
                        <label for="cuotas">{"Cuotas"}</label>
                        <input
                            type="number"
                            id="cuotas"
                            min="1"
                            max="12"
                            prop:value=move || form.get().cuotas.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(1);
                                form.update(|f| f.cuotas = value);
                            }
                        />
                    </div>
                </div>

                <div class="items-section">
                    <div class="items-section__header">
                        <h3>{"Ítems"}</h3>
                        <button class="button button--secondary" on:click=move |_| add_item()>
                            {icon("plus")}
                            {"Agregar ítem"}
                        </button>
                    </div>

                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Equipo"}</th>
                                <th class="table__header-cell">{"Cantidad"}</th>
                                <th class="table__header-cell">{"Precio unitario"}</th>
                                <th class="table__header-cell">{"Subtotal"}</th>
                                <th class="table__header-cell">{""}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || form.get().items.iter().enumerate().map(|(index, item)| {
                                let producto_id = item.producto_id_producto;
                                let cantidad = item.cantidad;
                                let precio = item.precio_unitario;
                                let subtotal = cantidad as f64 * precio;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <select
                                                prop:value=producto_id.to_string()
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev).parse().unwrap_or(0);
                                                    form.update(|f| {
                                                        if let Some(it) = f.items.get_mut(index) {
                                                            it.producto_id_producto = value;
                                                        }
                                                    });
                                                }
                                            >
                                                <option value="0">{"Seleccionar equipo..."}</option>
                                                {productos.get().into_iter().map(|p| {
                                                    let id = p.id_producto;
                                                    view! {
                                                        <option
                                                            value={id.to_string()}
                                                            selected=producto_id == id
                                                        >
                                                            {p.etiqueta()}
                                                        </option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                min="1"
                                                prop:value=cantidad.to_string()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev).parse().unwrap_or(1);
                                                    form.update(|f| {
                                                        if let Some(it) = f.items.get_mut(index) {
                                                            it.cantidad = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                prop:value=precio.to_string()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                                    form.update(|f| {
                                                        if let Some(it) = f.items.get_mut(index) {
                                                            it.precio_unitario = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">{format_money(subtotal)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title="Quitar ítem"
                                                on:click=move |_| remove_item(index)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>

                    <div class="items-section__total">
                        <strong>{"Total: "}</strong>
                        {move || format_money(total())}
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| save()
                    disabled=move || !is_valid()
                >
                    {icon("save")}
                    {"Crear orden"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
