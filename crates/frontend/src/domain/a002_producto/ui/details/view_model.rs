use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::domain::a002_producto::aggregate::ProductoDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_proveedor;
use crate::domain::a002_producto::api;

/// ViewModel for the producto form
#[derive(Clone)]
pub struct ProductoDetailsViewModel {
    pub form: RwSignal<ProductoDto>,
    pub editing_id: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<String>>,
    pub proveedores: RwSignal<Vec<Proveedor>>,
}

impl ProductoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductoDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            proveedores: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.editing_id.get().is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Populate the proveedor select
    pub fn load_proveedores(&self) {
        let proveedores = self.proveedores;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match a001_proveedor::api::fetch_all().await {
                Ok(v) => proveedores.set(v),
                Err(e) => error.set(Some(format!("Error al cargar proveedores: {}", e))),
            }
        });
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
                    form.set(ProductoDto {
                        marca: p.marca,
                        modelo: p.modelo,
                        numero_de_serie: p.numero_de_serie,
                        // The backend may append a time suffix, the date input wants yyyy-MM-dd
                        fecha_compra: p
                            .fecha_compra
                            .map(|f| f.split('T').next().unwrap_or(&f).to_string())
                            .unwrap_or_default(),
                        garantia_meses: p.garantia_meses.unwrap_or(0),
                        proveedor_id_proveedor: p.proveedor_id_proveedor.unwrap_or(0),
                    });
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

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
                Some(id) => api::update(id, &current).await,
                None => api::create(&current).await,
            };
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
