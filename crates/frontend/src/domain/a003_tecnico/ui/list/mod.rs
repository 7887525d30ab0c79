use crate::domain::a003_tecnico::api;
use crate::domain::a003_tecnico::ui::details::TecnicoDetails;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, sort_list, Sortable};
use crate::shared::toast::use_toast;
use contracts::domain::a003_tecnico::aggregate::{Tecnico, TecnicoFiltro};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::rc::Rc;

impl Sortable for Tecnico {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "documento" => self.documento.cmp(&other.documento),
            "especialidad" => self
                .especialidad
                .to_lowercase()
                .cmp(&other.especialidad.to_lowercase()),
            "vigencia_hasta" => self.vigencia_hasta.cmp(&other.vigencia_hasta),
            "proveedor" => self.proveedor_nombre.cmp(&other.proveedor_nombre),
            _ => self.nombre.to_lowercase().cmp(&other.nombre.to_lowercase()),
        }
    }
}

/// Técnicos list. The nombre/especialidad filters run server side, the
/// backend exposes them as query params.
#[component]
pub fn TecnicoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Tecnico>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filtro_nombre, set_filtro_nombre) = signal(String::new());
    let (filtro_especialidad, set_filtro_especialidad) = signal(String::new());
    let (sort_field, set_sort_field) = signal("nombre".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (current_page, set_current_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let toast = use_toast();

    let fetch = move || {
        let filtro = TecnicoFiltro {
            nombre: filtro_nombre.get_untracked(),
            especialidad: filtro_especialidad.get_untracked(),
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all(&filtro).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible = Signal::derive(move || {
        let mut list = items.get();
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

    let apply_filters = move || {
        set_current_page.set(0);
        fetch();
    };

    let clear_filters = move || {
        set_filtro_nombre.set(String::new());
        set_filtro_especialidad.set(String::new());
        set_current_page.set(0);
        fetch();
    };

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
                w.confirm_with_message(&format!("¿Eliminar el técnico \"{}\"?", nombre))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::remove(id).await {
                Ok(()) => {
                    toast.success("Técnico eliminado");
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
                    <h1 class="header__title">{"Técnicos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Nuevo técnico"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    placeholder="Filtrar por nombre..."
                    prop:value=move || filtro_nombre.get()
                    on:input=move |ev| set_filtro_nombre.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            apply_filters();
                        }
                    }
                />
                <input
                    type="text"
                    placeholder="Filtrar por especialidad..."
                    prop:value=move || filtro_especialidad.get()
                    on:input=move |ev| set_filtro_especialidad.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            apply_filters();
                        }
                    }
                />
                <button class="button button--secondary" on:click=move |_| apply_filters()>
                    {"Buscar"}
                </button>
                <button class="button button--secondary" on:click=move |_| clear_filters()>
                    {icon("x")}
                    {"Limpiar"}
                </button>
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
                                on:click=create_sort_toggle("nombre", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Nombre"}
                                {move || get_sort_indicator(&sort_field.get(), "nombre", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("documento", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Documento"}
                                {move || get_sort_indicator(&sort_field.get(), "documento", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("especialidad", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Especialidad"}
                                {move || get_sort_indicator(&sort_field.get(), "especialidad", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("vigencia_hasta", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Vigencia"}
                                {move || get_sort_indicator(&sort_field.get(), "vigencia_hasta", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("proveedor", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Proveedor"}
                                {move || get_sort_indicator(&sort_field.get(), "proveedor", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{""}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || paged.get().into_iter().map(|row| {
                            let id = row.id_tecnico;
                            let nombre = row.nombre.clone();
                            let vigencia = format!(
                                "{} - {}",
                                format_date_opt(row.vigencia_desde.as_deref()),
                                format_date_opt(row.vigencia_hasta.as_deref())
                            );
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| handle_edit(id)
                                >
                                    <td class="table__cell">{row.nombre.clone()}</td>
                                    <td class="table__cell">{row.documento.clone()}</td>
                                    <td class="table__cell">{row.email.clone()}</td>
                                    <td class="table__cell">{row.especialidad.clone()}</td>
                                    <td class="table__cell">{vigencia}</td>
                                    <td class="table__cell">{row.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
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
                    let title = if id.is_some() { "Editar técnico" } else { "Nuevo técnico" };
                    view! {
                        <Modal
                            title=title.to_string()
                            on_close=Callback::new(move |_| set_show_modal.set(false))
                        >
                            <TecnicoDetails
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
