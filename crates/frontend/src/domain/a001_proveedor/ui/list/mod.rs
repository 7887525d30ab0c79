use crate::domain::a001_proveedor::api;
use crate::domain::a001_proveedor::ui::details::ProveedorDetails;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a001_proveedor::aggregate::Proveedor;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::rc::Rc;

impl Searchable for Proveedor {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.razon_social.to_lowercase().contains(&f)
            || self.cuit.contains(filter)
            || self.email.to_lowercase().contains(&f)
    }
}

impl Sortable for Proveedor {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "cuit" => self.cuit.cmp(&other.cuit),
            "email" => self.email.cmp(&other.email),
            "estado" => self.estado.cmp(&other.estado),
            _ => self
                .razon_social
                .to_lowercase()
                .cmp(&other.razon_social.to_lowercase()),
        }
    }
}

#[component]
pub fn ProveedorList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Proveedor>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("razon_social".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (current_page, set_current_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let toast = use_toast();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible = Signal::derive(move || {
        let mut list = filter_list(items.get(), &filter.get());
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    });

    let total_count = Signal::derive(move || visible.get().len());
    let total_pages = Signal::derive(move || {
        let size = page_size.get().max(1);
        visible.get().len().div_ceil(size)
    });
    let paged = Signal::derive(move || {
        let size = page_size.get().max(1);
        let start = current_page.get() * size;
        visible.get().into_iter().skip(start).take(size).collect::<Vec<_>>()
    });

    let handle_create_new = move || {
        set_editing_id.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |id: i64| {
        set_editing_id.set(Some(id));
        set_show_modal.set(true);
    };

    let handle_delete = move |id: i64, nombre: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("¿Eliminar el proveedor \"{}\"?", nombre))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::remove(id).await {
                Ok(()) => {
                    toast.success("Proveedor eliminado");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Proveedores"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| {
                            set_filter.set(v);
                            set_current_page.set(0);
                        })
                        placeholder="Buscar por razón social, CUIT o email..."
                    />
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Nuevo proveedor"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("razon_social", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Razón social"}
                                {move || get_sort_indicator(&sort_field.get(), "razon_social", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("cuit", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"CUIT"}
                                {move || get_sort_indicator(&sort_field.get(), "cuit", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("email", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Email"}
                                {move || get_sort_indicator(&sort_field.get(), "email", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Teléfono"}</th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("estado", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Estado"}
                                {move || get_sort_indicator(&sort_field.get(), "estado", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{""}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || paged.get().into_iter().map(|row| {
                            let id = row.id_proveedor;
                            let nombre = row.razon_social.clone();
                            let inactivo = row.esta_inactivo();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--inactive=inactivo
                                    on:click=move |_| handle_edit(id)
                                >
                                    <td class="table__cell">{row.razon_social.clone()}</td>
                                    <td class="table__cell">{row.cuit.clone()}</td>
                                    <td class="table__cell">{row.email.clone()}</td>
                                    <td class="table__cell">{row.telefono.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{row.estado.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Eliminar"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle_delete(id, nombre.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |p| set_current_page.set(p))
                on_page_size_change=Callback::new(move |s| {
                    set_page_size.set(s);
                    set_current_page.set(0);
                })
            />

            <Show when=move || show_modal.get()>
                {move || {
                    let id = editing_id.get();
                    let title = if id.is_some() { "Editar proveedor" } else { "Nuevo proveedor" };
                    view! {
                        <Modal
                            title=title.to_string()
                            on_close=Callback::new(move |_| set_show_modal.set(false))
                        >
                            <ProveedorDetails
                                id=id
                                on_saved=Rc::new(move |_| {
                                    set_show_modal.set(false);
                                    fetch();
                                })
                                on_cancel=Rc::new(move |_| set_show_modal.set(false))
                            />
                        </Modal>
                    }
                }}
            </Show>
        </div>
    }
}
