use std::sync::atomic::{AtomicU32, Ordering};

use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

const TOAST_DISMISS_MS: f64 = 5000.0;

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Handle for the transient notification queue, provided as context at the
/// app root. Toasts never block input and dismiss themselves.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.list.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        self.list.write().push(Toast { id, kind, text });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            <For each=move || toasts.list.get() key=|toast| toast.id let:toast>
                <ToastItem toast />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| toasts.dismiss(id), TOAST_DISMISS_MS);
    start(());

    let color = match toast.kind {
        ToastKind::Success => "border-green text-green",
        ToastKind::Error => "border-red text-red",
    };
    view! {
        <div
            role="status"
            class=format!("px-4 py-3 rounded-md border bg-background shadow-lg {color}")
        >
            {toast.text}
        </div>
    }
}
