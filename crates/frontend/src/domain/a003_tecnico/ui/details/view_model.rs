use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::domain::a003_tecnico::aggregate::TecnicoDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_proveedor;
use crate::domain::a003_tecnico::api;

fn iso_date(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// ViewModel for the técnico form
#[derive(Clone)]
pub struct TecnicoDetailsViewModel {
    pub form: RwSignal<TecnicoDto>,
    pub editing_id: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<String>>,
    pub proveedores: RwSignal<Vec<Proveedor>>,
}

impl TecnicoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TecnicoDto::default()),
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

    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else { return };
        self.editing_id.set(Some(existing_id));

        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(t) => {
                    form.set(TecnicoDto {
                        nombre: t.nombre,
                        documento: t.documento,
                        email: t.email,
                        telefono: t.telefono.unwrap_or_default(),
                        especialidad: t.especialidad,
                        vigencia_desde: t.vigencia_desde.as_deref().map(iso_date).unwrap_or_default(),
                        vigencia_hasta: t.vigencia_hasta.as_deref().map(iso_date).unwrap_or_default(),
                        proveedor_id_proveedor: t.proveedor_id_proveedor.unwrap_or(0),
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
