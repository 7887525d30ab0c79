//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "panel",
            label: "Panel",
            icon: "bar-chart",
            items: vec![
                ("d400_executive", "Panel ejecutivo", "bar-chart"),
                ("d401_reportes", "Reportes", "clipboard"),
            ],
        },
        MenuGroup {
            id: "maestros",
            label: "Maestros",
            icon: "database",
            items: vec![
                ("a001_proveedor", "Proveedores", "building"),
                ("a002_producto", "Equipos", "package"),
                ("a003_tecnico", "Técnicos", "users"),
            ],
        },
        MenuGroup {
            id: "operaciones",
            label: "Operaciones",
            icon: "layers",
            items: vec![
                ("a005_orden_compra", "Órdenes de compra", "shopping-cart"),
                ("a006_factura", "Facturas y pagos", "receipt"),
                ("a004_incidente", "Incidentes", "alert-triangle"),
                ("a007_calificacion", "Calificaciones", "star"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded, the menu is short.
    let expanded_groups = RwSignal::new(vec![
        "panel".to_string(),
        "maestros".to_string(),
        "operaciones".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded={
                                    let gid_exp = group_id_for_exp.clone();
                                    move || expanded_groups.get().contains(&gid_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                            let item_id = StoredValue::new(id.to_string());
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        let iid = item_id.get_value();
                                                        ctx.is_active(&iid)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        ctx.navigate(id);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
