use crate::domain::a004_incidente::api;
use crate::domain::a004_incidente::ui::forms::{
    AsignarTecnicoForm, ReportarIncidenteForm, ResolverIncidenteForm,
};
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::toast::use_toast;
use contracts::domain::a004_incidente::aggregate::{EstadoIncidente, Incidente};
use leptos::prelude::*;
use std::rc::Rc;

/// Qué modal de flujo está abierto.
#[derive(Clone, Copy, PartialEq)]
enum FlujoModal {
    Reportar,
    Asignar(i64),
    Resolver(i64),
}

impl Searchable for Incidente {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.descripcion.to_lowercase().contains(&f)
            || self
                .producto_nombre
                .as_deref()
                .map(|p| p.to_lowercase().contains(&f))
                .unwrap_or(false)
            || self
                .tecnico_nombre
                .as_deref()
                .map(|t| t.to_lowercase().contains(&f))
                .unwrap_or(false)
    }
}

fn estado_badge(estado: EstadoIncidente) -> AnyView {
    let class = match estado {
        EstadoIncidente::Abierto => "badge badge--open",
        EstadoIncidente::EnProgreso => "badge badge--progress",
        EstadoIncidente::Resuelto => "badge badge--done",
    };
    view! { <span class=class>{estado.label()}</span> }.into_any()
}

fn equipo_label(inc: &Incidente) -> String {
    match (&inc.producto_nombre, &inc.marca, &inc.modelo) {
        (Some(nombre), _, _) => nombre.clone(),
        (None, Some(marca), Some(modelo)) => format!("{} {}", marca, modelo),
        _ => "-".to_string(),
    }
}

#[component]
pub fn IncidenteList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Incidente>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (solo_abiertos, set_solo_abiertos) = signal(false);
    let (current_page, set_current_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let (modal, set_modal) = signal::<Option<FlujoModal>>(None);
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
        if solo_abiertos.get() {
            list.retain(|i| i.estado != EstadoIncidente::Resuelto);
        }
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
                    <h1 class="header__title">{"Incidentes"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| {
                            set_filter.set(v);
                            set_current_page.set(0);
                        })
                        placeholder="Buscar por descripción, equipo o técnico..."
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || solo_abiertos.get()
                            on:change=move |ev| {
                                set_solo_abiertos.set(event_target_checked(&ev));
                                set_current_page.set(0);
                            }
                        />
                        {"Solo pendientes"}
                    </label>
                    <button class="button button--primary" on:click=move |_| set_modal.set(Some(FlujoModal::Reportar))>
                        {icon("plus")}
                        {"Reportar incidente"}
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
                            <th class="table__header-cell">{"#"}</th>
                            <th class="table__header-cell">{"Descripción"}</th>
                            <th class="table__header-cell">{"Equipo"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Técnico"}</th>
                            <th class="table__header-cell">{"Resuelto el"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || paged.get().into_iter().map(|row| {
                            let id = row.idincidente;
                            let estado = row.estado;
                            let equipo = equipo_label(&row);
                            let acciones = match estado {
                                EstadoIncidente::Abierto => view! {
                                    <button
                                        class="button button--secondary button--small"
                                        on:click=move |_| set_modal.set(Some(FlujoModal::Asignar(id)))
                                    >
                                        {"Asignar técnico"}
                                    </button>
                                }.into_any(),
                                EstadoIncidente::EnProgreso => view! {
                                    <button
                                        class="button button--secondary button--small"
                                        on:click=move |_| set_modal.set(Some(FlujoModal::Resolver(id)))
                                    >
                                        {"Resolver"}
                                    </button>
                                }.into_any(),
                                EstadoIncidente::Resuelto => view! {
                                    <span class="muted">{"-"}</span>
                                }.into_any(),
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id}</td>
                                    <td class="table__cell">{row.descripcion.clone()}</td>
                                    <td class="table__cell">{equipo}</td>
                                    <td class="table__cell">{estado_badge(estado)}</td>
                                    <td class="table__cell">{row.tecnico_nombre.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{format_date_opt(row.fecha_resolucion.as_deref())}</td>
                                    <td class="table__cell table__cell--actions">{acciones}</td>
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

            <Show when=move || modal.get().is_some()>
                {move || {
                    let close = Callback::new(move |_| set_modal.set(None));
                    match modal.get() {
                        Some(FlujoModal::Reportar) => view! {
                            <Modal title={"Reportar incidente".to_string()} on_close=close>
                                <ReportarIncidenteForm
                                    on_saved=Rc::new(move |_| {
                                        toast.success("Incidente reportado");
                                        set_modal.set(None);
                                        fetch();
                                    })
                                    on_cancel=Rc::new(move |_| set_modal.set(None))
                                />
                            </Modal>
                        }.into_any(),
                        Some(FlujoModal::Asignar(id)) => view! {
                            <Modal title=format!("Asignar técnico al incidente #{}", id) on_close=close>
                                <AsignarTecnicoForm
                                    incidente_id=id
                                    on_saved=Rc::new(move |_| {
                                        toast.success("Técnico asignado");
                                        set_modal.set(None);
                                        fetch();
                                    })
                                    on_cancel=Rc::new(move |_| set_modal.set(None))
                                />
                            </Modal>
                        }.into_any(),
                        Some(FlujoModal::Resolver(id)) => view! {
                            <Modal title=format!("Resolver incidente #{}", id) on_close=close>
                                <ResolverIncidenteForm
                                    incidente_id=id
                                    on_saved=Rc::new(move |_| {
                                        toast.success("Incidente resuelto");
                                        set_modal.set(None);
                                        fetch();
                                    })
                                    on_cancel=Rc::new(move |_| set_modal.set(None))
                                />
                            </Modal>
                        }.into_any(),
                        None => view! { <></> }.into_any(),
                    }
                }}
            </Show>
        </div>
    }
}
