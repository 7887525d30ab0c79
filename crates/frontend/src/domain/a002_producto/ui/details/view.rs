use super::view_model::ProductoDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductoDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductoDetailsViewModel::new();
    vm.load_proveedores();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="marca">{"Marca"}</label>
                    <input
                        type="text"
                        id="marca"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().marca
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.marca = event_target_value(&ev));
                            }
                        }
                        placeholder="Marca del equipo"
                    />
                </div>

                <div class="form-group">
                    <label for="modelo">{"Modelo"}</label>
                    <input
                        type="text"
                        id="modelo"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().modelo
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.modelo = event_target_value(&ev));
                            }
                        }
                        placeholder="Modelo"
                    />
                </div>

                <div class="form-group">
                    <label for="numero_de_serie">{"Número de serie"}</label>
                    <input
                        type="text"
                        id="numero_de_serie"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().numero_de_serie
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.numero_de_serie = event_target_value(&ev));
                            }
                        }
                        placeholder="Número de serie"
                    />
                </div>

                <div class="form-group">
                    <label for="fecha_compra">{"Fecha de compra"}</label>
                    <input
                        type="date"
                        id="fecha_compra"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().fecha_compra
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.fecha_compra = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="garantia_meses">{"Garantía (meses)"}</label>
                    <input
                        type="number"
                        id="garantia_meses"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().garantia_meses.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0);
                                vm.form.update(|f| f.garantia_meses = value);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="proveedor">{"Proveedor"}</label>
                    <select
                        id="proveedor"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().proveedor_id_proveedor.to_string()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0);
                                vm.form.update(|f| f.proveedor_id_proveedor = value);
                            }
                        }
                    >
                        <option value="0">{"Seleccionar proveedor..."}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.proveedores.get().into_iter().map(|p| {
                                let selected = {
                                    let vm = vm.clone();
                                    let id = p.id_proveedor;
                                    move || vm.form.get().proveedor_id_proveedor == id
                                };
                                view! {
                                    <option value={p.id_proveedor.to_string()} selected=selected>
                                        {p.razon_social.clone()}
                                    </option>
                                }
                            }).collect_view()
                        }
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Guardar" } else { "Crear" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
