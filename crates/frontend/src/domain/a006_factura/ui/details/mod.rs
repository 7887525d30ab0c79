use crate::domain::a006_factura::api;
use crate::shared::components::modal::Modal;
use crate::shared::date_utils::{format_date, format_date_opt, format_money, today_iso};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a006_factura::aggregate::{
    EstadoCuota, FacturaDetalle, PagoCuotaDto, METODOS_PAGO,
};
use leptos::prelude::*;

/// Detalle de factura: líneas, plan de pago y registro de pagos.
#[component]
pub fn FacturaDetails(id: i64, on_changed: Callback<()>) -> impl IntoView {
    let (detalle, set_detalle) = signal::<Option<FacturaDetalle>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (cuota_a_pagar, set_cuota_a_pagar) = signal::<Option<i64>>(None);
    let pago = RwSignal::new(PagoCuotaDto::default());
    let toast = use_toast();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_detalle(id).await {
                Ok(d) => set_detalle.set(Some(d)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let abrir_pago = move |id_plan_pago: i64| {
        pago.set(PagoCuotaDto {
            fecha_pago: today_iso(),
            ..Default::default()
        });
        set_cuota_a_pagar.set(Some(id_plan_pago));
    };

    let confirmar_pago = move || {
        let Some(id_plan_pago) = cuota_a_pagar.get() else {
            return;
        };
        let current = pago.get();
        if let Err(e) = current.validate() {
            toast.error(e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::pagar_cuota(id_plan_pago, &current).await {
                Ok(()) => {
                    toast.success("Pago registrado");
                    set_cuota_a_pagar.set(None);
                    fetch();
                    on_changed.run(());
                }
                Err(e) => toast.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            {move || detalle.get().map(|d| {
                let total = d.items.iter().map(|i| i.importe()).sum::<f64>();
                view! {
                    <div class="details-readonly">
                        <div class="details-readonly__row">
                            <span class="details-readonly__label">{"Estado:"}</span>
                            <span>{d.estado.clone().unwrap_or_else(|| "-".to_string())}</span>
                        </div>
                        <div class="details-readonly__row">
                            <span class="details-readonly__label">{"Orden de compra:"}</span>
                            <span>{d.orden_compra_id_orden_compra.map(|o| format!("#{}", o)).unwrap_or_else(|| "-".to_string())}</span>
                        </div>

                        <h3>{"Ítems"}</h3>
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

                        <h3>{"Plan de pago"}</h3>
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Cuota"}</th>
                                    <th class="table__header-cell">{"Vencimiento"}</th>
                                    <th class="table__header-cell">{"Importe"}</th>
                                    <th class="table__header-cell">{"Estado"}</th>
                                    <th class="table__header-cell">{"Fecha de pago"}</th>
                                    <th class="table__header-cell">{""}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {d.plan_pago.iter().map(|cuota| {
                                    let id_plan_pago = cuota.id_plan_pago;
                                    let pendiente = cuota.estado == EstadoCuota::Pendiente;
                                    let estado_view = if pendiente {
                                        view! { <span class="badge badge--open">{"Pendiente"}</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--done">{"Pagado"}</span> }.into_any()
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{cuota.numero_cuota.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="table__cell">{format_date(&cuota.fecha_vencimiento)}</td>
                                            <td class="table__cell">{format_money(cuota.importe)}</td>
                                            <td class="table__cell">{estado_view}</td>
                                            <td class="table__cell">{format_date_opt(cuota.fecha_pago.as_deref())}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || pendiente>
                                                    <button
                                                        class="button button--secondary button--small"
                                                        on:click=move |_| abrir_pago(id_plan_pago)
                                                    >
                                                        {"Registrar pago"}
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
            })}

            <Show when=move || cuota_a_pagar.get().is_some()>
                <Modal
                    title={"Registrar pago de cuota".to_string()}
                    on_close=Callback::new(move |_| set_cuota_a_pagar.set(None))
                >
                    <div class="details-form">
                        <div class="form-group">
                            <label for="metodo_pago">{"Método de pago"}</label>
                            <select
                                id="metodo_pago"
                                prop:value=move || pago.get().metodo_pago
                                on:change=move |ev| {
                                    pago.update(|p| p.metodo_pago = event_target_value(&ev));
                                }
                            >
                                <option value="">{"Seleccionar método..."}</option>
                                {METODOS_PAGO.into_iter().map(|metodo| {
                                    view! {
                                        <option value=metodo>{metodo}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="fecha_pago">{"Fecha de pago"}</label>
                            <input
                                type="date"
                                id="fecha_pago"
                                prop:value=move || pago.get().fecha_pago
                                on:input=move |ev| {
                                    pago.update(|p| p.fecha_pago = event_target_value(&ev));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="observaciones">{"Observaciones"}</label>
                            <textarea
                                id="observaciones"
                                prop:value=move || pago.get().observaciones
                                on:input=move |ev| {
                                    pago.update(|p| p.observaciones = event_target_value(&ev));
                                }
                                placeholder="Opcional"
                                rows="2"
                            />
                        </div>
                    </div>

                    <div class="details-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| confirmar_pago()
                            disabled=move || pago.get().validate().is_err()
                        >
                            {icon("save")}
                            {"Confirmar pago"}
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_cuota_a_pagar.set(None)
                        >
                            {icon("cancel")}
                            {"Cancelar"}
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
