use super::view_model::TecnicoDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn TecnicoDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = TecnicoDetailsViewModel::new();
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
                    <label for="nombre">{"Nombre"}</label>
                    <input
                        type="text"
                        id="nombre"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().nombre
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.nombre = event_target_value(&ev));
                            }
                        }
                        placeholder="Nombre y apellido"
                    />
                </div>

                <div class="form-group">
                    <label for="documento">{"Documento"}</label>
                    <input
                        type="text"
                        id="documento"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().documento
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.documento = event_target_value(&ev));
                            }
                        }
                        placeholder="DNI, mínimo 7 caracteres"
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.email = event_target_value(&ev));
                            }
                        }
                        placeholder="tecnico@servicio.com"
                    />
                </div>

                <div class="form-group">
                    <label for="telefono">{"Teléfono"}</label>
                    <input
                        type="text"
                        id="telefono"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().telefono
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.telefono = event_target_value(&ev));
                            }
                        }
                        placeholder="Teléfono de contacto"
                    />
                </div>

                <div class="form-group">
                    <label for="especialidad">{"Especialidad"}</label>
                    <input
                        type="text"
                        id="especialidad"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().especialidad
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.especialidad = event_target_value(&ev));
                            }
                        }
                        placeholder="Ej.: Notebooks, Impresoras"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="vigencia_desde">{"Vigencia desde"}</label>
                        <input
                            type="date"
                            id="vigencia_desde"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().vigencia_desde
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.vigencia_desde = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="vigencia_hasta">{"Vigencia hasta"}</label>
                        <input
                            type="date"
                            id="vigencia_hasta"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().vigencia_hasta
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.vigencia_hasta = event_target_value(&ev));
                                }
                            }
                        />
                    </div>
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
