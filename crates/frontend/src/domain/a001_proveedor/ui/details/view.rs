use super::view_model::ProveedorDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProveedorDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProveedorDetailsViewModel::new();
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
                    <label for="razon_social">{"Razón social"}</label>
                    <input
                        type="text"
                        id="razon_social"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().razon_social
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.razon_social = event_target_value(&ev));
                            }
                        }
                        placeholder="Razón social del proveedor"
                    />
                </div>

                <div class="form-group">
                    <label for="cuit">{"CUIT"}</label>
                    <input
                        type="text"
                        id="cuit"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().cuit
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.cuit = event_target_value(&ev));
                            }
                        }
                        placeholder="11 dígitos, con o sin guiones"
                        maxlength="13"
                        disabled={
                            let vm = vm_clone.clone();
                            move || vm.is_edit_mode()()
                        }
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
                        placeholder="contacto@proveedor.com"
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
                        placeholder="Teléfono de contacto (opcional)"
                    />
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
