use leptos::prelude::*;

/// Default page shown right after login.
pub const PAGINA_INICIAL: &str = "d400_executive";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PAGINA_INICIAL.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, key: &str) {
        log::info!("navigate: key='{}'", key);
        self.active.set(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
