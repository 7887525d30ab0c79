use crate::domain::a005_orden_compra;
use crate::domain::a006_factura::api;
use crate::shared::date_utils::{format_date_opt, format_money};
use crate::shared::icons::icon;
use contracts::domain::a005_orden_compra::aggregate::{LineaOrdenCompra, LineaOrdenCompraDto, OrdenCompra};
use contracts::domain::a006_factura::aggregate::FacturaDto;
use leptos::prelude::*;
use std::rc::Rc;

/// Alta de factura a partir de una orden de compra. Las líneas se copian
/// tal cual de la orden elegida, no se editan acá.
#[component]
pub fn FacturaCreate(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let form = RwSignal::new(FacturaDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let ordenes = RwSignal::new(Vec::<OrdenCompra>::new());
    let lineas = RwSignal::new(Vec::<LineaOrdenCompra>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match a005_orden_compra::api::fetch_all().await {
            Ok(v) => ordenes.set(v),
            Err(e) => error.set(Some(format!("Error al cargar órdenes: {}", e))),
        }
    });

    // Al elegir una orden se traen sus líneas y se copian al payload
    let select_orden = move |id: i64| {
        form.update(|f| {
            f.orden_compra_id_orden_compra = id;
            f.items.clear();
        });
        lineas.set(Vec::new());
        if id <= 0 {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match a005_orden_compra::api::fetch_detalle(id).await {
                Ok(detalle) => {
                    let copiadas: Vec<LineaOrdenCompraDto> = detalle
                        .items
                        .iter()
                        .map(|l| LineaOrdenCompraDto {
                            producto_id_producto: l.producto_id_producto.unwrap_or(0),
                            cantidad: l.cantidad,
                            precio_unitario: l.precio_unitario,
                        })
                        .collect();
                    if copiadas.is_empty() {
                        error.set(Some(
                            "La orden seleccionada no tiene items. No se puede facturar".into(),
                        ));
                    } else {
                        error.set(None);
                    }
                    form.update(|f| f.items = copiadas);
                    lineas.set(detalle.items);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let is_valid = move || form.get().validate().is_ok();

    let total = move || lineas.get().iter().map(|l| l.importe()).sum::<f64>();

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
                    <label for="orden">{"Orden de compra"}</label>
                    <select
                        id="orden"
                        prop:value=move || form.get().orden_compra_id_orden_compra.to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            select_orden(value);
                        }
                    >
                        <option value="0">{"Seleccionar orden..."}</option>
                        {move || ordenes.get().into_iter().map(|o| {
                            let id = o.id_orden_compra;
                            let etiqueta = format!(
                                "#{} - {} ({})",
                                id,
                                o.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string()),
                                format_date_opt(o.fecha.as_deref())
                            );
                            view! {
                                <option
                                    value={id.to_string()}
                                    selected=move || form.get().orden_compra_id_orden_compra == id
                                >
                                    {etiqueta}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <Show when=move || !lineas.get().is_empty()>
                    <div class="items-section">
                        <h3>{"Ítems a facturar"}</h3>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Equipo"}</th>
                                    <th class="table__header-cell">{"Cantidad"}</th>
                                    <th class="table__header-cell">{"Precio unitario"}</th>
                                    <th class="table__header-cell">{"Subtotal"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || lineas.get().into_iter().map(|l| {
                                    let nombre = l
                                        .producto_nombre
                                        .clone()
                                        .or_else(|| match (&l.marca, &l.modelo) {
                                            (Some(ma), Some(mo)) => Some(format!("{} {}", ma, mo)),
                                            _ => None,
                                        })
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{nombre}</td>
                                            <td class="table__cell">{l.cantidad}</td>
                                            <td class="table__cell">{format_money(l.precio_unitario)}</td>
                                            <td class="table__cell">{format_money(l.importe())}</td>
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
                </Show>

                <div class="form-row">
                    <div class="form-group">
                        <label for="cantidad_cuotas">{"Cantidad de cuotas"}</label>
                        <input
                            type="number"
                            id="cantidad_cuotas"
                            min="1"
                            max="12"
                            prop:value=move || form.get().info_pago.cantidad_cuotas.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(1);
                                form.update(|f| f.info_pago.cantidad_cuotas = value);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="primer_vencimiento">{"Primer vencimiento"}</label>
                        <input
                            type="date"
                            id="primer_vencimiento"
                            prop:value=move || form.get().info_pago.primer_vencimiento
                            on:input=move |ev| {
                                form.update(|f| f.info_pago.primer_vencimiento = event_target_value(&ev));
                            }
                        />
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
                    {"Crear factura"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
