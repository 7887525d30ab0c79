use crate::domain::a005_orden_compra::api;
use crate::domain::a005_orden_compra::ui::create::OrdenCompraCreate;
use crate::domain::a005_orden_compra::ui::details::OrdenCompraDetails;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date_opt, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a005_orden_compra::aggregate::OrdenCompra;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::rc::Rc;

impl Searchable for OrdenCompra {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.proveedor_nombre
            .as_deref()
            .map(|p| p.to_lowercase().contains(&f))
            .unwrap_or(false)
            || self.id_orden_compra.to_string().contains(filter)
    }
}

impl Sortable for OrdenCompra {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "proveedor" => self.proveedor_nombre.cmp(&other.proveedor_nombre),
            "fecha" => self.fecha.cmp(&other.fecha),
            "monto_total" => self
                .monto_total
                .partial_cmp(&other.monto_total)
                .unwrap_or(Ordering::Equal),
            _ => self.id_orden_compra.cmp(&other.id_orden_compra),
        }
    }
}

#[component]
pub fn OrdenCompraList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<OrdenCompra>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("fecha".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let (current_page, set_current_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let (show_create, set_show_create) = signal(false);
    let (detalle_id, set_detalle_id) = signal::<Option<i64>>(None);
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

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Órdenes de compra"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| {
                            set_filter.set(v);
                            set_current_page.set(0);
                        })
                        placeholder="Buscar por proveedor o número..."
                    />
                    <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                        {icon("plus")}
                        {"Nueva orden"}
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
                                on:click=create_sort_toggle("id", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"#"}
                                {move || get_sort_indicator(&sort_field.get(), "id", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("proveedor", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Proveedor"}
                                {move || get_sort_indicator(&sort_field.get(), "proveedor", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("fecha", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Fecha"}
                                {move || get_sort_indicator(&sort_field.get(), "fecha", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle("monto_total", sort_field.into(), set_sort_field, set_sort_ascending)
                            >
                                {"Monto total"}
                                {move || get_sort_indicator(&sort_field.get(), "monto_total", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Cuotas"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || paged.get().into_iter().map(|row| {
                            let id = row.id_orden_compra;
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_detalle_id.set(Some(id))
                                >
                                    <td class="table__cell">{id}</td>
                                    <td class="table__cell">{row.proveedor_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{format_date_opt(row.fecha.as_deref())}</td>
                                    <td class="table__cell">{row.monto_total.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{row.cuotas.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())}</td>
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

            <Show when=move || show_create.get()>
                <Modal
                    title={"Nueva orden de compra".to_string()}
                    on_close=Callback::new(move |_| set_show_create.set(false))
                >
                    <OrdenCompraCreate
                        on_saved=Rc::new(move |_| {
                            toast.success("Orden de compra creada");
                            set_show_create.set(false);
                            fetch();
                        })
                        on_cancel=Rc::new(move |_| set_show_create.set(false))
                    />
                </Modal>
            </Show>

            <Show when=move || detalle_id.get().is_some()>
                {move || detalle_id.get().map(|id| view! {
                    <Modal
                        title=format!("Orden de compra #{}", id)
                        on_close=Callback::new(move |_| set_detalle_id.set(None))
                    >
                        <OrdenCompraDetails id=id />
                    </Modal>
                })}
            </Show>
        </div>
    }
}
