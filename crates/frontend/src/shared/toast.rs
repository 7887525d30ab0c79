/// Toast notifications
///
/// `ToastService` lives in the reactive context. Any component can grab
/// it with `use_toast()` and push a success or error message; toasts
/// dismiss themselves after a few seconds.
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    fn push(&self, message: String, kind: ToastKind) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast { id, message, kind });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

/// Renders the active toasts in a fixed stack at the top right
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px;">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let background = match toast.kind {
                            ToastKind::Success => "#2e7d32",
                            ToastKind::Error => "#c62828",
                        };
                        let id = toast.id;
                        view! {
                            <div
                                style=format!(
                                    "background: {}; color: white; padding: 10px 14px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); display: flex; align-items: center; gap: 10px; max-width: 360px;",
                                    background
                                )
                            >
                                <span style="flex: 1; font-size: 14px;">{toast.message.clone()}</span>
                                <button
                                    style="background: none; border: none; color: white; cursor: pointer; padding: 2px; display: inline-flex;"
                                    on:click=move |_| service.dismiss(id)
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
