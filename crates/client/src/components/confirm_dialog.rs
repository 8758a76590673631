use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};

/// Modal confirmation used before irreversible actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-40 flex items-center justify-center bg-black/40 px-4",
            onclick: move |_| on_cancel.call(()),
            div { class: "w-full max-w-sm rounded-lg bg-white p-5 shadow-xl",
                onclick: move |e| e.stop_propagation(),
                h3 { class: "mb-2 text-lg font-semibold text-gray-900", "{title}" }
                p { class: "mb-5 text-sm text-gray-600", "{message}" }
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: Some(ButtonVariant::Secondary),
                        disabled: Some(busy),
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: Some(ButtonVariant::Danger),
                        disabled: Some(busy),
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
