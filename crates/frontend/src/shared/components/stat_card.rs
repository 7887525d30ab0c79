use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI card for the dashboards. The value arrives preformatted since
/// the backend mixes numbers and display strings in its KPI payloads.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Preformatted value, or None while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Optional extra class, e.g. "stat-card--warning"
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let card_class = if class.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {}", class)
    };

    let formatted = move || value.get().unwrap_or_else(|| "...".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
