/// Generic list utilities (search, sort, shared UI pieces)
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait for row types that support text search
pub trait Searchable {
    /// Returns true if the row matches the filter text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compares two rows by the named column
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the named column
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Filter a list by the search text (min 3 characters, otherwise unfiltered)
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() || filter.trim().len() < 3 {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the active highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar (mín. 3 caracteres)...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the pending timer, if any
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let is_filter_active = move || {
        let text = value.get();
        !text.trim().is_empty() && text.trim().len() >= 3
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Limpiar"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Build a click handler that toggles sorting on the given column
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        nombre: String,
        monto: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.nombre.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "monto" => self
                    .monto
                    .partial_cmp(&other.monto)
                    .unwrap_or(Ordering::Equal),
                _ => self.nombre.cmp(&other.nombre),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { nombre: "Distribuidora Sur".into(), monto: 3200.0 },
            Row { nombre: "Equipos Norte".into(), monto: 1500.0 },
            Row { nombre: "Servicios Andinos".into(), monto: 2100.0 },
        ]
    }

    #[test]
    fn short_filters_do_not_filter() {
        assert_eq!(filter_list(rows(), "su").len(), 3);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filtered = filter_list(rows(), "SUR");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre, "Distribuidora Sur");
    }

    #[test]
    fn sorts_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "monto", true);
        assert_eq!(items[0].nombre, "Equipos Norte");
        sort_list(&mut items, "monto", false);
        assert_eq!(items[0].nombre, "Distribuidora Sur");
    }

    #[test]
    fn sort_indicator_marks_active_column() {
        assert_eq!(get_sort_indicator("nombre", "nombre", true), " ▲");
        assert_eq!(get_sort_indicator("nombre", "nombre", false), " ▼");
        assert_eq!(get_sort_indicator("nombre", "monto", true), " ⇅");
    }
}
