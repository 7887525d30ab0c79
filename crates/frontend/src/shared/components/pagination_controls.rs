use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGE_SIZES: [usize; 4] = [25, 50, 100, 200];

/// Pager shared by every list page: first/prev "page / total (count)"
/// next/last plus a page-size selector. Pages are 0-indexed internally
/// and shown 1-indexed.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let nav_button = move |icon_name: &'static str,
                           title: &'static str,
                           disabled: fn(usize, usize) -> bool,
                           target: fn(usize, usize) -> usize| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || disabled(current_page.get(), total_pages.get())
                on:click=move |_| {
                    let page = current_page.get();
                    let total = total_pages.get();
                    if !disabled(page, total) {
                        on_page_change.run(target(page, total));
                    }
                }
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "Primera página", |p, _| p == 0, |_, _| 0)}
            {nav_button("chevron-left", "Página anterior", |p, _| p == 0, |p, _| p - 1)}
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get(),
                )}
            </span>
            {nav_button("chevron-right", "Página siguiente", |p, t| p + 1 >= t, |p, _| p + 1)}
            {nav_button("chevrons-right", "Última página", |p, t| p + 1 >= t, |_, t| t.saturating_sub(1))}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZES.into_iter().map(|size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
