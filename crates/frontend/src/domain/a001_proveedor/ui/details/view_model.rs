use contracts::domain::a001_proveedor::aggregate::{ProveedorDto, ProveedorUpdateDto};
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_proveedor::api;

/// ViewModel for the proveedor form
#[derive(Clone)]
pub struct ProveedorDetailsViewModel {
    pub form: RwSignal<ProveedorDto>,
    pub editing_id: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<String>>,
}

impl ProveedorDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProveedorDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.editing_id.get().is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Load form data from server if an ID is provided
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else { return };
        self.editing_id.set(Some(existing_id));

        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(p) => {
                    form.set(ProveedorDto {
                        razon_social: p.razon_social,
                        cuit: p.cuit,
                        email: p.email,
                        telefono: p.telefono.unwrap_or_default(),
                    });
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    /// Create or update against the backend. The CUIT never travels on
    /// updates, the backend treats it as immutable.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let editing_id = self.editing_id.get();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing_id {
                Some(id) => {
                    let update = ProveedorUpdateDto {
                        razon_social: current.razon_social,
                        email: current.email,
                        telefono: current.telefono,
                    };
                    api::update(id, &update).await
                }
                None => api::create(&current).await,
            };
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
