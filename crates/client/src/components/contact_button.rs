use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, ButtonVariant, TextArea};
use crate::hooks::use_notifier;
use crate::notifications::Notification;
use crate::workflow::{contact_user, ContactOutcome};
use crate::Route;

/// Opens a direct conversation with a user, falling back to a contact
/// request. Hidden when the user would contact themselves.
#[component]
pub fn ContactButton(
    recipient_id: i64,
    recipient_name: String,
    post_id: Option<i64>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let notifier = use_notifier();
    let nav = use_navigator();
    let mut show_modal = use_signal(|| false);
    let mut note = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    if auth.user_id() == Some(recipient_id) {
        return rsx! {};
    }

    rsx! {
        Button {
            variant: Some(ButtonVariant::Secondary),
            onclick: move |_| show_modal.set(true),
            "Contact"
        }

        if show_modal() {
            div { class: "fixed inset-0 z-40 flex items-center justify-center bg-black/40 px-4",
                div { class: "w-full max-w-md rounded-lg bg-white p-5 shadow-xl",
                    h3 { class: "mb-2 text-lg font-semibold text-gray-900", "Contact {recipient_name}" }
                    p { class: "mb-3 text-sm text-gray-600",
                        "A conversation is opened directly when possible; otherwise {recipient_name} receives a contact request with your note."
                    }
                    TextArea {
                        value: note.cloned(),
                        placeholder: Some("Optional note".to_string()),
                        oninput: move |e: FormEvent| note.set(e.value()),
                    }
                    div { class: "mt-4 flex justify-end gap-2",
                        Button {
                            variant: Some(ButtonVariant::Secondary),
                            disabled: Some(is_submitting()),
                            onclick: move |_| {
                                show_modal.set(false);
                                note.set(String::new());
                            },
                            "Cancel"
                        }
                        Button {
                            disabled: Some(is_submitting()),
                            onclick: {
                                let recipient_name = recipient_name.clone();
                                move |_| {
                                    let auth = auth.clone();
                                    let notifier = notifier.clone();
                                    let recipient_name = recipient_name.clone();
                                    spawn(async move {
                                        is_submitting.set(true);
                                        let client = auth.client();
                                        let text = note.cloned();
                                        match contact_user(&client, auth.user_id(), recipient_id, post_id, &text).await {
                                            Ok(ContactOutcome::Conversation { conversation_id }) => {
                                                toaster.success(format!("Conversation started with {recipient_name}!"));
                                                show_modal.set(false);
                                                note.set(String::new());
                                                nav.push(Route::ConversationDetail { conversation_id });
                                            }
                                            Ok(ContactOutcome::RequestSent) => {
                                                notifier.publish(Notification::ContactRequestSent {
                                                    username: recipient_name.clone(),
                                                });
                                                show_modal.set(false);
                                                note.set(String::new());
                                            }
                                            Err(e) => {
                                                toaster.error(e.to_string());
                                            }
                                        }
                                        is_submitting.set(false);
                                    });
                                }
                            },
                            if is_submitting() { "Sending…" } else { "Send" }
                        }
                    }
                }
            }
        }
    }
}
