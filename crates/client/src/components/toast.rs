//! Toast notifications: provider, handle and container.

use chrono::Utc;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::toast::{run_toast, QueueHandle, Severity, ToastId, ToastQueue, DEFAULT_DURATION_MS};

/// Handle for showing toasts, available from any component below
/// [`ToastProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl QueueHandle for Signal<ToastQueue> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R {
        f(&mut self.write())
    }
}

impl Toaster {
    /// Queue a toast and start its timer. The timer runs on the root scope,
    /// so the toast outlives the page that raised it.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: Option<u32>,
    ) -> ToastId {
        let mut queue = self.queue;
        let id = queue
            .write()
            .push(Utc::now(), message, severity, duration_ms);
        let duration = duration_ms.unwrap_or(DEFAULT_DURATION_MS);

        spawn_forever(run_toast(queue, id, duration));

        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::Error, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::Warning, None)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::Info, None)
    }

    pub fn success_for(&self, message: impl Into<String>, duration_ms: u32) -> ToastId {
        self.show(message, Severity::Success, Some(duration_ms))
    }

    pub fn error_for(&self, message: impl Into<String>, duration_ms: u32) -> ToastId {
        self.show(message, Severity::Error, Some(duration_ms))
    }

    pub fn warning_for(&self, message: impl Into<String>, duration_ms: u32) -> ToastId {
        self.show(message, Severity::Warning, Some(duration_ms))
    }

    pub fn info_for(&self, message: impl Into<String>, duration_ms: u32) -> ToastId {
        self.show(message, Severity::Info, Some(duration_ms))
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::new);
    let toaster = use_context_provider(|| Toaster { queue });

    rsx! {
        {children}
        ToastContainer { toaster }
    }
}

#[component]
fn ToastContainer(toaster: Toaster) -> Element {
    let queue = toaster.queue.read();

    rsx! {
        div { class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-80",
            for toast in queue.iter() {
                div {
                    key: "{toast.id}",
                    class: format!(
                        "toast toast-{} {}",
                        toast.severity.as_str(),
                        if toast.is_visible() { "toast-visible" } else { "toast-entering" },
                    ),
                    span { class: "flex-1 text-sm", "{toast.message}" }
                    button {
                        class: "ml-3 text-lg leading-none opacity-70 hover:opacity-100",
                        onclick: {
                            let id = toast.id;
                            move |_| toaster.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
