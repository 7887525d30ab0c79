use crate::domain::a005_orden_compra::api;
use crate::shared::date_utils::{format_date_opt, format_money};
use contracts::domain::a005_orden_compra::aggregate::OrdenCompraDetalle;
use leptos::prelude::*;

/// Vista de solo lectura de una orden con sus líneas.
#[component]
pub fn OrdenCompraDetails(id: i64) -> impl IntoView {
    let (detalle, set_detalle) = signal::<Option<OrdenCompraDetalle>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_detalle(id).await {
            Ok(d) => set_detalle.set(Some(d)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            {move || detalle.get().map(|d| {
                let total = d.total.unwrap_or_else(|| {
                    d.items.iter().map(|i| i.importe()).sum()
                });
                view! {
                    <div class="details-readonly">
                        <div class="details-readonly__row">
                            <span class="details-readonly__label">{"Proveedor:"}</span>
                            <span>{d.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</span>
                        </div>
                        <div class="details-readonly__row">
                            <span class="details-readonly__label">{"Fecha:"}</span>
                            <span>{format_date_opt(d.fecha.as_deref())}</span>
                        </div>
                        <div class="details-readonly__row">
                            <span class="details-readonly__label">{"Cuotas:"}</span>
                            <span>{d.cuotas.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())}</span>
                        </div>

                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Equipo"}</th>
                                    <th class="table__header-cell">{"Cantidad"}</th>
                                    <th class="table__header-cell">{"Precio unitario"}</th>
                                    <th class="table__header-cell">{"Subtotal"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {d.items.iter().map(|item| {
                                    let nombre = item
                                        .producto_nombre
                                        .clone()
                                        .or_else(|| match (&item.marca, &item.modelo) {
                                            (Some(ma), Some(mo)) => Some(format!("{} {}", ma, mo)),
                                            _ => None,
                                        })
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{nombre}</td>
                                            <td class="table__cell">{item.cantidad}</td>
                                            <td class="table__cell">{format_money(item.precio_unitario)}</td>
                                            <td class="table__cell">{format_money(item.importe())}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>

                        <div class="items-section__total">
                            <strong>{"Total: "}</strong>
                            {format_money(total)}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
